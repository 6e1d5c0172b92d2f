use imovel_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Lifecycle of a property or user account under plan limits.
///
/// Frozen resources are inaccessible but never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceState {
    /// Usable.
    Active,
    /// Over the plan limit.
    Frozen,
}

impl ResourceState {
    /// Moves an active resource to frozen.
    pub fn freeze(self) -> AppResult<Self> {
        match self {
            Self::Active => Ok(Self::Frozen),
            Self::Frozen => Err(AppError::Conflict(
                "resource is already frozen".to_owned(),
            )),
        }
    }

    /// Restores a frozen resource.
    pub fn unfreeze(self) -> AppResult<Self> {
        match self {
            Self::Frozen => Ok(Self::Active),
            Self::Active => Err(AppError::Conflict("resource is already active".to_owned())),
        }
    }

    /// Returns whether the resource can be used.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceState;

    #[test]
    fn freeze_then_unfreeze_returns_to_active() {
        let state = ResourceState::Active
            .freeze()
            .and_then(ResourceState::unfreeze);
        assert!(matches!(state, Ok(ResourceState::Active)));
    }

    #[test]
    fn repeated_transitions_conflict() {
        assert!(ResourceState::Frozen.freeze().is_err());
        assert!(ResourceState::Active.unfreeze().is_err());
    }

    #[test]
    fn state_uses_upper_case_wire_values() {
        let encoded = serde_json::to_string(&ResourceState::Frozen).unwrap_or_default();
        assert_eq!(encoded, "\"FROZEN\"");
    }
}
