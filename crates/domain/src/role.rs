use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A user's position in the agency/owner/tenant hierarchy.
///
/// Values arriving over the wire that are not in the catalogue are kept as
/// [`Role::Unrecognized`] instead of being rejected; such roles hold no
/// permissions and land on no dashboard.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Platform owner.
    Ceo,
    /// Platform administrator.
    Admin,
    /// Administrator of one agency.
    AgencyAdmin,
    /// Manager inside an agency.
    AgencyManager,
    /// Broker working for an agency.
    Broker,
    /// Property owner represented by an agency.
    Proprietario,
    /// Owner managing properties without an agency.
    IndependentOwner,
    /// Tenant.
    Inquilino,
    /// Condominium or building manager.
    BuildingManager,
    /// External legal auditor with read access.
    LegalAuditor,
    /// Commercial representative onboarding agencies.
    Representative,
    /// Machine client using the public API.
    ApiClient,
    /// Role value not present in the catalogue.
    Unrecognized(String),
}

impl Role {
    /// Parses a role tag. Never fails: unknown tags become [`Role::Unrecognized`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        Self::all()
            .iter()
            .find(|role| role.as_str() == value)
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(value.to_owned()))
    }

    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ceo => "CEO",
            Self::Admin => "ADMIN",
            Self::AgencyAdmin => "AGENCY_ADMIN",
            Self::AgencyManager => "AGENCY_MANAGER",
            Self::Broker => "BROKER",
            Self::Proprietario => "PROPRIETARIO",
            Self::IndependentOwner => "INDEPENDENT_OWNER",
            Self::Inquilino => "INQUILINO",
            Self::BuildingManager => "BUILDING_MANAGER",
            Self::LegalAuditor => "LEGAL_AUDITOR",
            Self::Representative => "REPRESENTATIVE",
            Self::ApiClient => "API_CLIENT",
            Self::Unrecognized(value) => value.as_str(),
        }
    }

    /// Returns every catalogued role.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::Ceo,
            Role::Admin,
            Role::AgencyAdmin,
            Role::AgencyManager,
            Role::Broker,
            Role::Proprietario,
            Role::IndependentOwner,
            Role::Inquilino,
            Role::BuildingManager,
            Role::LegalAuditor,
            Role::Representative,
            Role::ApiClient,
        ];

        ALL
    }

    /// Returns whether this role is part of the catalogue.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Unrecognized(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
