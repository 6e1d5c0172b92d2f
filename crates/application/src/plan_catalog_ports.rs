use async_trait::async_trait;
use imovel_core::AppResult;
use imovel_domain::PlanDefinition;

/// Port to the source of plan definitions (remote plans API or a static table).
#[async_trait]
pub trait PlanCatalog: Send + Sync {
    /// Lists every published plan.
    async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>>;

    /// Finds one plan by its upper-cased name.
    async fn find_plan(&self, plan_name: &str) -> AppResult<Option<PlanDefinition>>;
}
