//! Static role to permission table.
//!
//! Every role lists its grants explicitly. There is no inheritance between
//! roles, so a grant added to one role never leaks into another.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use imovel_core::{AppError, AppResult};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::{Permission, Role};

static NO_PERMISSIONS: BTreeSet<Permission> = BTreeSet::new();

/// Role entries of a matrix document, duplicates included.
struct MatrixDocument(Vec<(String, Vec<Permission>)>);

impl<'de> Deserialize<'de> for MatrixDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = MatrixDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object of role names to permission lists")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, Vec<Permission>>()? {
                    entries.push(entry);
                }
                Ok(MatrixDocument(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Immutable mapping from role to granted permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl PermissionMatrix {
    /// Builds the compiled-in matrix.
    #[must_use]
    pub fn standard() -> Self {
        let grants = Role::all()
            .iter()
            .map(|role| {
                (
                    role.clone(),
                    standard_grants(role).iter().copied().collect(),
                )
            })
            .collect();

        Self { grants }
    }

    /// Builds a matrix from configured grants.
    ///
    /// Catalogued roles missing from `grants` get an empty entry. Roles outside
    /// the catalogue and duplicate role entries are rejected.
    pub fn from_grants<I>(grants: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Role, Vec<Permission>)>,
    {
        let mut matrix: BTreeMap<Role, BTreeSet<Permission>> = BTreeMap::new();

        for (role, permissions) in grants {
            if !role.is_recognized() {
                return Err(AppError::Validation(format!(
                    "permission matrix references unknown role '{role}'"
                )));
            }
            if matrix.contains_key(&role) {
                return Err(AppError::Validation(format!(
                    "permission matrix lists role '{role}' more than once"
                )));
            }

            matrix.insert(role, permissions.into_iter().collect());
        }

        for role in Role::all() {
            matrix.entry(role.clone()).or_default();
        }

        Ok(Self { grants: matrix })
    }

    /// Parses a JSON object of `{"ROLE": ["resource:action", ...]}` into a matrix.
    ///
    /// Object keys are kept in document order, so a role listed twice is
    /// rejected like any other duplicate grant.
    pub fn from_json(document: &str) -> AppResult<Self> {
        let MatrixDocument(entries) =
            serde_json::from_str::<MatrixDocument>(document).map_err(|error| {
                AppError::Validation(format!("invalid permission matrix document: {error}"))
            })?;

        Self::from_grants(
            entries
                .into_iter()
                .map(|(role, permissions)| (Role::parse(role.as_str()), permissions)),
        )
    }

    /// Returns the permissions granted to `role`.
    ///
    /// Unrecognized roles get the empty set.
    #[must_use]
    pub fn permissions_for(&self, role: &Role) -> &BTreeSet<Permission> {
        self.grants.get(role).unwrap_or(&NO_PERMISSIONS)
    }

    /// Returns whether `role` holds `permission`.
    #[must_use]
    pub fn grants(&self, role: &Role, permission: Permission) -> bool {
        self.permissions_for(role).contains(&permission)
    }

    /// Iterates over every role entry.
    pub fn entries(&self) -> impl Iterator<Item = (&Role, &BTreeSet<Permission>)> {
        self.grants.iter()
    }
}

impl Default for PermissionMatrix {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_grants(role: &Role) -> &'static [Permission] {
    use Permission::*;

    match role {
        Role::Ceo => Permission::all(),
        Role::Admin => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            PropertiesDelete,
            ContractsCreate,
            ContractsRead,
            ContractsUpdate,
            ContractsDelete,
            InspectionsCreate,
            InspectionsRead,
            InspectionsUpdate,
            InspectionsDelete,
            InspectionsApprove,
            InvoicesCreate,
            InvoicesRead,
            InvoicesUpdate,
            InvoicesDelete,
            PaymentsRead,
            PaymentsApprove,
            UsersCreate,
            UsersRead,
            UsersUpdate,
            UsersDelete,
            AgenciesCreate,
            AgenciesRead,
            AgenciesUpdate,
            PlansRead,
            PlansManage,
            ReportsRead,
            ReportsExport,
            DocumentsCreate,
            DocumentsRead,
            DocumentsDelete,
            AuditRead,
            SettingsManage,
        ],
        Role::AgencyAdmin => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            PropertiesDelete,
            ContractsCreate,
            ContractsRead,
            ContractsUpdate,
            ContractsDelete,
            ContractsSign,
            InspectionsCreate,
            InspectionsRead,
            InspectionsUpdate,
            InspectionsDelete,
            InspectionsApprove,
            InvoicesCreate,
            InvoicesRead,
            InvoicesUpdate,
            InvoicesDelete,
            PaymentsCreate,
            PaymentsRead,
            PaymentsApprove,
            UsersCreate,
            UsersRead,
            UsersUpdate,
            UsersDelete,
            AgenciesRead,
            AgenciesUpdate,
            PlansRead,
            PlansManage,
            ReportsRead,
            ReportsExport,
            DocumentsCreate,
            DocumentsRead,
            DocumentsDelete,
            AuditRead,
            SettingsManage,
        ],
        Role::AgencyManager => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            ContractsCreate,
            ContractsRead,
            ContractsUpdate,
            InspectionsCreate,
            InspectionsRead,
            InspectionsUpdate,
            InspectionsApprove,
            InvoicesCreate,
            InvoicesRead,
            InvoicesUpdate,
            PaymentsRead,
            UsersRead,
            AgenciesRead,
            PlansRead,
            ReportsRead,
            ReportsExport,
            DocumentsCreate,
            DocumentsRead,
        ],
        Role::Broker => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            ContractsCreate,
            ContractsRead,
            InspectionsCreate,
            InspectionsRead,
            InvoicesRead,
            UsersRead,
            ReportsRead,
            DocumentsCreate,
            DocumentsRead,
        ],
        Role::Proprietario => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            ContractsRead,
            ContractsSign,
            InspectionsRead,
            InspectionsApprove,
            InvoicesRead,
            PaymentsCreate,
            PaymentsRead,
            PlansRead,
            ReportsRead,
            DocumentsCreate,
            DocumentsRead,
        ],
        Role::IndependentOwner => &[
            PropertiesCreate,
            PropertiesRead,
            PropertiesUpdate,
            PropertiesDelete,
            ContractsCreate,
            ContractsRead,
            ContractsUpdate,
            ContractsDelete,
            ContractsSign,
            InspectionsCreate,
            InspectionsRead,
            InspectionsUpdate,
            InspectionsDelete,
            InspectionsApprove,
            InvoicesCreate,
            InvoicesRead,
            InvoicesUpdate,
            PaymentsCreate,
            PaymentsRead,
            PaymentsApprove,
            UsersCreate,
            UsersRead,
            PlansRead,
            PlansManage,
            ReportsRead,
            ReportsExport,
            DocumentsCreate,
            DocumentsRead,
            DocumentsDelete,
            SettingsManage,
        ],
        Role::Inquilino => &[
            PropertiesRead,
            ContractsRead,
            ContractsSign,
            InspectionsRead,
            InspectionsApprove,
            InvoicesRead,
            PaymentsCreate,
            PaymentsRead,
            DocumentsCreate,
            DocumentsRead,
        ],
        Role::BuildingManager => &[
            PropertiesRead,
            PropertiesUpdate,
            InspectionsCreate,
            InspectionsRead,
            InspectionsUpdate,
            InvoicesRead,
            ReportsRead,
            DocumentsCreate,
            DocumentsRead,
        ],
        Role::LegalAuditor => &[
            PropertiesRead,
            ContractsRead,
            InspectionsRead,
            InvoicesRead,
            PaymentsRead,
            DocumentsRead,
            AuditRead,
            ReportsRead,
            ReportsExport,
        ],
        Role::Representative => &[AgenciesCreate, AgenciesRead, UsersRead, PlansRead, ReportsRead],
        Role::ApiClient => &[
            ApiAccess,
            PropertiesRead,
            ContractsRead,
            InvoicesRead,
            PaymentsRead,
        ],
        Role::Unrecognized(_) => &[],
    }
}

#[cfg(test)]
mod tests {
    use imovel_core::AppError;
    use proptest::prelude::*;

    use super::PermissionMatrix;
    use crate::{Permission, Role};

    #[test]
    fn every_catalogued_role_has_an_entry() {
        let matrix = PermissionMatrix::standard();
        let roles: Vec<&Role> = matrix.entries().map(|(role, _)| role).collect();
        assert_eq!(roles.len(), Role::all().len());
    }

    #[test]
    fn unknown_role_yields_no_permissions() {
        let matrix = PermissionMatrix::standard();
        assert!(matrix.permissions_for(&Role::parse("NOT_A_ROLE")).is_empty());
    }

    #[test]
    fn proprietario_can_pay_but_not_delete_contracts() {
        let matrix = PermissionMatrix::standard();
        assert!(matrix.grants(&Role::Proprietario, Permission::PaymentsCreate));
        assert!(!matrix.grants(&Role::Proprietario, Permission::ContractsDelete));
    }

    #[test]
    fn ceo_holds_every_permission() {
        let matrix = PermissionMatrix::standard();
        assert_eq!(
            matrix.permissions_for(&Role::Ceo).len(),
            Permission::all().len()
        );
    }

    #[test]
    fn tenant_cannot_read_plans() {
        let matrix = PermissionMatrix::standard();
        assert!(!matrix.grants(&Role::Inquilino, Permission::PlansRead));
        assert!(matrix.grants(&Role::ApiClient, Permission::ApiAccess));
    }

    #[test]
    fn configured_matrix_fills_missing_roles_with_empty_sets() {
        let matrix = PermissionMatrix::from_grants([(Role::Broker, vec![Permission::AuditRead])]);
        assert!(matrix.is_ok());
        let matrix = matrix.unwrap_or_default();

        assert_eq!(matrix.entries().count(), Role::all().len());
        assert!(matrix.grants(&Role::Broker, Permission::AuditRead));
        assert!(!matrix.grants(&Role::Broker, Permission::PropertiesRead));
        assert!(matrix.permissions_for(&Role::Ceo).is_empty());
    }

    #[test]
    fn configured_matrix_rejects_unknown_and_duplicate_roles() {
        let unknown = PermissionMatrix::from_grants([(Role::parse("GHOST"), Vec::new())]);
        assert!(unknown.is_err());

        let duplicate = PermissionMatrix::from_grants([
            (Role::Broker, Vec::new()),
            (Role::Broker, vec![Permission::UsersRead]),
        ]);
        assert!(duplicate.is_err());
    }

    #[test]
    fn json_document_parses_into_matrix() {
        let matrix = PermissionMatrix::from_json(
            r#"{"INQUILINO": ["payments:create", "contracts:read"], "BROKER": []}"#,
        );
        assert!(matrix.is_ok());
        let matrix = matrix.unwrap_or_default();

        assert!(matrix.grants(&Role::Inquilino, Permission::PaymentsCreate));
        assert!(matrix.permissions_for(&Role::Broker).is_empty());
        assert!(matrix.permissions_for(&Role::Admin).is_empty());
    }

    #[test]
    fn json_document_listing_a_role_twice_is_rejected() {
        let matrix = PermissionMatrix::from_json(
            r#"{"BROKER": ["contracts:read"], "INQUILINO": [], "BROKER": []}"#,
        );
        assert!(matches!(matrix, Err(AppError::Validation(_))));
    }

    #[test]
    fn json_document_with_unknown_permission_is_rejected() {
        let matrix = PermissionMatrix::from_json(r#"{"BROKER": ["contracts:burn"]}"#);
        assert!(matrix.is_err());
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop_oneof![
            proptest::sample::select(Role::all().to_vec()),
            "[A-Z_]{1,16}".prop_map(|raw| Role::parse(raw.as_str())),
        ]
    }

    proptest! {
        #[test]
        fn grants_agree_with_permission_set(
            role in any_role(),
            permission in proptest::sample::select(Permission::all().to_vec()),
        ) {
            let matrix = PermissionMatrix::standard();
            prop_assert_eq!(
                matrix.grants(&role, permission),
                matrix.permissions_for(&role).contains(&permission)
            );
            if !role.is_recognized() {
                prop_assert!(matrix.permissions_for(&role).is_empty());
            }
        }
    }
}
