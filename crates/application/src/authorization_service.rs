//! Role-based authorization queries for view gating.
//!
//! Every query degrades to "denied" when the user is missing or the role is
//! not catalogued. Only [`AuthorizationService::require_permission`] returns
//! an error, for callers that need one.

use std::collections::BTreeSet;
use std::sync::Arc;

use imovel_domain::{Dashboard, Permission, PermissionMatrix, Role, User};

mod permissions;
mod roles;


/// Application service answering role and permission queries.
#[derive(Debug, Clone)]
pub struct AuthorizationService {
    matrix: Arc<PermissionMatrix>,
}

impl AuthorizationService {
    /// Creates a service over a permission matrix built at start-up.
    #[must_use]
    pub fn new(matrix: Arc<PermissionMatrix>) -> Self {
        Self { matrix }
    }

    /// Creates a service over the compiled-in matrix.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Arc::new(PermissionMatrix::standard()))
    }

    /// Returns the permissions configured for `role`; empty for unknown roles.
    #[must_use]
    pub fn permissions_for(&self, role: &Role) -> &BTreeSet<Permission> {
        self.matrix.permissions_for(role)
    }

    /// Returns the landing dashboard of the user, if any.
    #[must_use]
    pub fn dashboard_for(&self, user: Option<&User>) -> Option<Dashboard> {
        user.and_then(|user| Dashboard::for_role(user.role()))
    }
}

impl Default for AuthorizationService {
    fn default() -> Self {
        Self::standard()
    }
}
