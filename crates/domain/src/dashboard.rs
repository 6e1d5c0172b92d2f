use serde::{Deserialize, Serialize};

use crate::Role;

/// Landing dashboards served to each kind of user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    /// Platform-wide administration.
    Platform,
    /// Agency back office.
    Agency,
    /// Broker portfolio.
    Broker,
    /// Owner portfolio and statements.
    Owner,
    /// Tenant contracts, invoices and payments.
    Tenant,
    /// Building maintenance and inspections.
    Building,
    /// Read-only audit workspace.
    Audit,
    /// API credentials and usage.
    Integration,
}

impl Dashboard {
    /// Returns a stable transport value for this dashboard.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Agency => "agency",
            Self::Broker => "broker",
            Self::Owner => "owner",
            Self::Tenant => "tenant",
            Self::Building => "building",
            Self::Audit => "audit",
            Self::Integration => "integration",
        }
    }

    /// Returns the landing dashboard for a role, or `None` for unrecognized roles.
    #[must_use]
    pub fn for_role(role: &Role) -> Option<Self> {
        let dashboard = match role {
            Role::Ceo | Role::Admin | Role::Representative => Self::Platform,
            Role::AgencyAdmin | Role::AgencyManager => Self::Agency,
            Role::Broker => Self::Broker,
            Role::Proprietario | Role::IndependentOwner => Self::Owner,
            Role::Inquilino => Self::Tenant,
            Role::BuildingManager => Self::Building,
            Role::LegalAuditor => Self::Audit,
            Role::ApiClient => Self::Integration,
            Role::Unrecognized(_) => return None,
        };

        Some(dashboard)
    }
}
