use std::fmt::{Display, Formatter};
use std::str::FromStr;

use imovel_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions granted to roles, stored as `resource:action` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    /// Allows registering new properties.
    PropertiesCreate,
    /// Allows listing and viewing properties.
    PropertiesRead,
    /// Allows editing property data.
    PropertiesUpdate,
    /// Allows removing properties.
    PropertiesDelete,
    /// Allows drafting rental contracts.
    ContractsCreate,
    /// Allows viewing rental contracts.
    ContractsRead,
    /// Allows editing rental contracts.
    ContractsUpdate,
    /// Allows terminating and removing contracts.
    ContractsDelete,
    /// Allows signing contracts.
    ContractsSign,
    /// Allows scheduling inspections.
    InspectionsCreate,
    /// Allows viewing inspection reports.
    InspectionsRead,
    /// Allows editing inspection reports.
    InspectionsUpdate,
    /// Allows removing inspections.
    InspectionsDelete,
    /// Allows approving an inspection report.
    InspectionsApprove,
    /// Allows issuing invoices.
    InvoicesCreate,
    /// Allows viewing invoices.
    InvoicesRead,
    /// Allows editing invoices.
    InvoicesUpdate,
    /// Allows cancelling invoices.
    InvoicesDelete,
    /// Allows registering payments.
    PaymentsCreate,
    /// Allows viewing payments.
    PaymentsRead,
    /// Allows confirming received payments.
    PaymentsApprove,
    /// Allows inviting users.
    UsersCreate,
    /// Allows listing users.
    UsersRead,
    /// Allows editing users.
    UsersUpdate,
    /// Allows removing users.
    UsersDelete,
    /// Allows onboarding agencies.
    AgenciesCreate,
    /// Allows viewing agencies.
    AgenciesRead,
    /// Allows editing agency data.
    AgenciesUpdate,
    /// Allows removing agencies.
    AgenciesDelete,
    /// Allows viewing subscription plans.
    PlansRead,
    /// Allows changing the subscription plan.
    PlansManage,
    /// Allows viewing reports.
    ReportsRead,
    /// Allows exporting reports.
    ReportsExport,
    /// Allows uploading documents.
    DocumentsCreate,
    /// Allows downloading documents.
    DocumentsRead,
    /// Allows removing documents.
    DocumentsDelete,
    /// Allows reading the audit trail.
    AuditRead,
    /// Allows changing account settings.
    SettingsManage,
    /// Allows programmatic API access.
    ApiAccess,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PropertiesCreate => "properties:create",
            Self::PropertiesRead => "properties:read",
            Self::PropertiesUpdate => "properties:update",
            Self::PropertiesDelete => "properties:delete",
            Self::ContractsCreate => "contracts:create",
            Self::ContractsRead => "contracts:read",
            Self::ContractsUpdate => "contracts:update",
            Self::ContractsDelete => "contracts:delete",
            Self::ContractsSign => "contracts:sign",
            Self::InspectionsCreate => "inspections:create",
            Self::InspectionsRead => "inspections:read",
            Self::InspectionsUpdate => "inspections:update",
            Self::InspectionsDelete => "inspections:delete",
            Self::InspectionsApprove => "inspections:approve",
            Self::InvoicesCreate => "invoices:create",
            Self::InvoicesRead => "invoices:read",
            Self::InvoicesUpdate => "invoices:update",
            Self::InvoicesDelete => "invoices:delete",
            Self::PaymentsCreate => "payments:create",
            Self::PaymentsRead => "payments:read",
            Self::PaymentsApprove => "payments:approve",
            Self::UsersCreate => "users:create",
            Self::UsersRead => "users:read",
            Self::UsersUpdate => "users:update",
            Self::UsersDelete => "users:delete",
            Self::AgenciesCreate => "agencies:create",
            Self::AgenciesRead => "agencies:read",
            Self::AgenciesUpdate => "agencies:update",
            Self::AgenciesDelete => "agencies:delete",
            Self::PlansRead => "plans:read",
            Self::PlansManage => "plans:manage",
            Self::ReportsRead => "reports:read",
            Self::ReportsExport => "reports:export",
            Self::DocumentsCreate => "documents:create",
            Self::DocumentsRead => "documents:read",
            Self::DocumentsDelete => "documents:delete",
            Self::AuditRead => "audit:read",
            Self::SettingsManage => "settings:manage",
            Self::ApiAccess => "api:access",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::PropertiesCreate,
            Permission::PropertiesRead,
            Permission::PropertiesUpdate,
            Permission::PropertiesDelete,
            Permission::ContractsCreate,
            Permission::ContractsRead,
            Permission::ContractsUpdate,
            Permission::ContractsDelete,
            Permission::ContractsSign,
            Permission::InspectionsCreate,
            Permission::InspectionsRead,
            Permission::InspectionsUpdate,
            Permission::InspectionsDelete,
            Permission::InspectionsApprove,
            Permission::InvoicesCreate,
            Permission::InvoicesRead,
            Permission::InvoicesUpdate,
            Permission::InvoicesDelete,
            Permission::PaymentsCreate,
            Permission::PaymentsRead,
            Permission::PaymentsApprove,
            Permission::UsersCreate,
            Permission::UsersRead,
            Permission::UsersUpdate,
            Permission::UsersDelete,
            Permission::AgenciesCreate,
            Permission::AgenciesRead,
            Permission::AgenciesUpdate,
            Permission::AgenciesDelete,
            Permission::PlansRead,
            Permission::PlansManage,
            Permission::ReportsRead,
            Permission::ReportsExport,
            Permission::DocumentsCreate,
            Permission::DocumentsRead,
            Permission::DocumentsDelete,
            Permission::AuditRead,
            Permission::SettingsManage,
            Permission::ApiAccess,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Parses a transport value, returning `None` for values outside the catalogue.
    ///
    /// Unknown values can never be granted, so callers checking access treat
    /// `None` as a denial.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
    }

    /// Returns the resource half of the storage value.
    #[must_use]
    pub fn resource(&self) -> &'static str {
        self.as_str()
            .split_once(':')
            .map(|(resource, _)| resource)
            .unwrap_or_default()
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(value).ok_or_else(|| {
            AppError::Validation(format!("unknown permission value '{value}'"))
        })
    }
}

impl TryFrom<String> for Permission {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.as_str().to_owned()
    }
}

impl Display for Permission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use super::Permission;

    #[test]
    fn permission_roundtrip_storage_value() {
        let permission = Permission::ContractsDelete;
        let restored = Permission::from_str(permission.as_str());
        assert!(matches!(restored, Ok(value) if value == permission));
    }

    #[test]
    fn unknown_permission_is_rejected() {
        let parsed = Permission::from_str("contracts:burn");
        assert!(parsed.is_err());
        assert_eq!(Permission::parse_lenient("contracts:burn"), None);
    }

    #[test]
    fn storage_values_are_unique_resource_action_pairs() {
        let values: BTreeSet<&str> = Permission::all().iter().map(Permission::as_str).collect();
        assert_eq!(values.len(), Permission::all().len());
        assert!(values.iter().all(|value| value.split(':').count() == 2));
    }

    #[test]
    fn resource_is_prefix_before_colon() {
        assert_eq!(Permission::PaymentsCreate.resource(), "payments");
        assert_eq!(Permission::ApiAccess.resource(), "api");
    }

    #[test]
    fn permission_serializes_as_storage_value() {
        let encoded = serde_json::to_string(&Permission::PlansRead).unwrap_or_default();
        assert_eq!(encoded, "\"plans:read\"");

        let decoded: Result<Permission, _> = serde_json::from_str("\"plans:delete\"");
        assert!(decoded.is_err());
    }
}
