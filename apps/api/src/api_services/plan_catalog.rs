use std::sync::Arc;

use imovel_application::PlanCatalog;
use imovel_core::AppError;
use imovel_infrastructure::{CachingPlanCatalog, HttpPlanCatalog, StaticPlanCatalog};
use tracing::info;

use crate::api_config::{ApiConfig, PlanCatalogConfig};

pub(super) fn build_plan_catalog(config: &ApiConfig) -> Result<Arc<dyn PlanCatalog>, AppError> {
    match &config.plan_catalog {
        PlanCatalogConfig::Static => {
            info!("using static plan catalog");
            Ok(Arc::new(StaticPlanCatalog::standard()?))
        }
        PlanCatalogConfig::Remote {
            base_url,
            cache_ttl,
            timeout,
        } => {
            let http_client = reqwest::Client::builder()
                .timeout(*timeout)
                .build()
                .map_err(|error| {
                    AppError::Internal(format!("failed to build plan catalog client: {error}"))
                })?;
            let remote = HttpPlanCatalog::new(http_client, base_url.clone())?;

            info!(
                %base_url,
                cache_ttl_seconds = cache_ttl.as_secs(),
                "using remote plan catalog"
            );
            Ok(Arc::new(CachingPlanCatalog::new(Arc::new(remote), *cache_ttl)))
        }
    }
}
