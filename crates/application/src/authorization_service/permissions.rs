use imovel_core::{AppError, AppResult};
use tracing::debug;

use super::*;

impl AuthorizationService {
    /// Returns whether the user holds `permission`. No user means no permission.
    #[must_use]
    pub fn has_permission(&self, user: Option<&User>, permission: Permission) -> bool {
        user.is_some_and(|user| self.matrix.grants(user.role(), permission))
    }

    /// Checks a permission given as its `resource:action` transport value.
    ///
    /// Values outside the catalogue are never granted.
    #[must_use]
    pub fn has_permission_value(&self, user: Option<&User>, permission: &str) -> bool {
        Permission::parse_lenient(permission)
            .is_some_and(|permission| self.has_permission(user, permission))
    }

    /// Ensures the user holds `permission`.
    ///
    /// Returns `Unauthorized` when there is no user and `Forbidden` when the
    /// role lacks the grant.
    pub fn require_permission(&self, user: Option<&User>, permission: Permission) -> AppResult<()> {
        let Some(user) = user else {
            return Err(AppError::Unauthorized(format!(
                "a signed-in user is required for '{permission}'"
            )));
        };

        if self.matrix.grants(user.role(), permission) {
            return Ok(());
        }

        debug!(user_id = %user.id(), role = %user.role(), %permission, "permission denied");
        Err(AppError::Forbidden(format!(
            "role '{}' is missing permission '{permission}'",
            user.role()
        )))
    }
}
