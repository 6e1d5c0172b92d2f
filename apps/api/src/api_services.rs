use imovel_application::{AuthorizationService, PlanLifecycleService};
use imovel_core::AppError;

use crate::api_config::ApiConfig;
use crate::state::AppState;

mod permissions;
mod plan_catalog;

pub async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let matrix = permissions::build_permission_matrix(config).await?;
    let catalog = plan_catalog::build_plan_catalog(config)?;

    Ok(AppState {
        authorization_service: AuthorizationService::new(matrix),
        plan_lifecycle_service: PlanLifecycleService::new(catalog),
        plan_catalog_source: config.plan_catalog.source_name(),
    })
}
