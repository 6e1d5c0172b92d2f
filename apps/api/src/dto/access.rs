use std::collections::BTreeSet;

use imovel_domain::{Dashboard, Permission, Role};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Access summary of the calling user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-response.ts"
)]
pub struct AccessResponse {
    pub authenticated: bool,
    pub role: Option<String>,
    pub plan: Option<String>,
    pub dashboard: Option<String>,
    pub permissions: Vec<String>,
}

impl AccessResponse {
    /// Response for a request without a forwarded identity.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            role: None,
            plan: None,
            dashboard: None,
            permissions: Vec::new(),
        }
    }
}

/// Permissions granted to one role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-permissions-response.ts"
)]
pub struct RolePermissionsResponse {
    pub role: String,
    pub recognized: bool,
    pub dashboard: Option<String>,
    pub permissions: Vec<String>,
}

impl RolePermissionsResponse {
    #[must_use]
    pub fn new(role: &Role, permissions: &BTreeSet<Permission>) -> Self {
        Self {
            role: role.as_str().to_owned(),
            recognized: role.is_recognized(),
            dashboard: Dashboard::for_role(role).map(|dashboard| dashboard.as_str().to_owned()),
            permissions: permission_values(permissions),
        }
    }
}

/// Outcome of a single permission check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/permission-check-response.ts"
)]
pub struct PermissionCheckResponse {
    pub permission: String,
    pub allowed: bool,
}

/// Outcome of a role check.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-check-response.ts"
)]
pub struct RoleCheckResponse {
    pub matches: bool,
}

/// Roles accepted by a role-set check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/any-role-check-request.ts"
)]
pub struct AnyRoleCheckRequest {
    pub roles: Vec<String>,
}

pub(crate) fn permission_values(permissions: &BTreeSet<Permission>) -> Vec<String> {
    permissions
        .iter()
        .map(|permission| permission.as_str().to_owned())
        .collect()
}
