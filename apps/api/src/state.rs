use imovel_application::{AuthorizationService, PlanLifecycleService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authorization_service: AuthorizationService,
    pub plan_lifecycle_service: PlanLifecycleService,
    /// `static` or `remote`, reported by the health endpoint.
    pub plan_catalog_source: &'static str,
}
