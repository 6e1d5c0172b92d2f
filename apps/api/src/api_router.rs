use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use imovel_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let access_routes = Router::new()
        .route(
            "/api/roles/{role}/permissions",
            get(handlers::access::role_permissions_handler),
        )
        .route("/api/me/access", get(handlers::access::my_access_handler))
        .route(
            "/api/me/permissions/{permission}",
            get(handlers::access::my_permission_check_handler),
        )
        .route(
            "/api/me/roles/any",
            post(handlers::access::my_any_role_check_handler),
        )
        .route(
            "/api/me/roles/{role}",
            get(handlers::access::my_role_check_handler),
        );

    let plan_routes = Router::new()
        .route("/api/plans", get(handlers::plans::list_plans_handler))
        .route(
            "/api/plans/preview",
            post(handlers::plans::preview_plan_change_handler),
        )
        .route(
            "/api/plans/{plan}/order",
            get(handlers::plans::plan_order_handler),
        )
        .route(
            "/api/plans/{current_plan}/compare/{new_plan}",
            get(handlers::plans::compare_plans_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(access_routes)
        .merge(plan_routes)
        .layer(from_fn(middleware::resolve_user))
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}
