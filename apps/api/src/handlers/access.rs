use axum::Json;
use axum::extract::{Extension, Path, State};
use imovel_domain::Role;

use crate::dto::{
    AccessResponse, AnyRoleCheckRequest, PermissionCheckResponse, RoleCheckResponse,
    RolePermissionsResponse,
};
use crate::middleware::CurrentUser;
use crate::state::AppState;


pub async fn role_permissions_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RolePermissionsResponse> {
    let role = Role::parse(role.as_str());
    let permissions = state.authorization_service.permissions_for(&role);

    Json(RolePermissionsResponse::new(&role, permissions))
}

pub async fn my_access_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<AccessResponse> {
    let Some(user) = user else {
        return Json(AccessResponse::anonymous());
    };

    let role = RolePermissionsResponse::new(
        user.role(),
        state.authorization_service.permissions_for(user.role()),
    );

    Json(AccessResponse {
        authenticated: true,
        role: Some(role.role),
        plan: Some(user.plan().to_owned()).filter(|plan| !plan.is_empty()),
        dashboard: role.dashboard,
        permissions: role.permissions,
    })
}

pub async fn my_permission_check_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(permission): Path<String>,
) -> Json<PermissionCheckResponse> {
    let allowed = state
        .authorization_service
        .has_permission_value(user.as_ref(), permission.as_str());

    Json(PermissionCheckResponse {
        permission,
        allowed,
    })
}

pub async fn my_role_check_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(role): Path<String>,
) -> Json<RoleCheckResponse> {
    let role = Role::parse(role.as_str());

    Json(RoleCheckResponse {
        matches: state.authorization_service.has_role(user.as_ref(), &role),
    })
}

pub async fn my_any_role_check_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<AnyRoleCheckRequest>,
) -> Json<RoleCheckResponse> {
    let roles: Vec<Role> = payload
        .roles
        .iter()
        .map(|role| Role::parse(role.as_str()))
        .collect();

    Json(RoleCheckResponse {
        matches: state
            .authorization_service
            .has_any_role(user.as_ref(), &roles),
    })
}
