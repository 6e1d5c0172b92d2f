//! Session user record supplied by the identity provider.

use imovel_core::{AgencyId, AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

/// Unique identifier for a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Creates a new random user identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a user identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a user identifier from its hyphenated transport form.
    pub fn parse(value: &str) -> AppResult<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|error| AppError::Validation(format!("invalid user id '{value}': {error}")))
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Authenticated user as seen by authorization and plan checks.
///
/// The role is assigned at account administration and does not change during
/// a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    role: Role,
    plan: String,
    agency_id: Option<AgencyId>,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(id: UserId, role: Role, plan: impl Into<String>, agency_id: Option<AgencyId>) -> Self {
        Self {
            id,
            role,
            plan: plan.into(),
            agency_id,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the user's role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the name of the user's current subscription plan.
    #[must_use]
    pub fn plan(&self) -> &str {
        self.plan.as_str()
    }

    /// Returns the agency the user belongs to, if any.
    #[must_use]
    pub fn agency_id(&self) -> Option<AgencyId> {
        self.agency_id
    }
}
