use std::collections::HashMap;

use async_trait::async_trait;
use imovel_application::PlanCatalog;
use imovel_core::AppResult;
use imovel_domain::{FreeAllowances, PlanDefinition, PlanLimit, PlanLimits};

/// Plan catalog backed by a fixed table, used when no remote plans API is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticPlanCatalog {
    plans: HashMap<String, PlanDefinition>,
}

impl StaticPlanCatalog {
    /// Creates a catalog from explicit definitions. Later duplicates replace earlier ones.
    #[must_use]
    pub fn new(plans: impl IntoIterator<Item = PlanDefinition>) -> Self {
        Self {
            plans: plans
                .into_iter()
                .map(|plan| (plan.name().to_owned(), plan))
                .collect(),
        }
    }

    /// Creates the catalog of the published tiers.
    pub fn standard() -> AppResult<Self> {
        Ok(Self::new([
            PlanDefinition::new(
                "FREE",
                "Gratuito",
                0,
                limits(1, 1, 1, 0, 0),
                allowances(1, 1, 0, 0),
            )?,
            PlanDefinition::new(
                "BASIC",
                "Básico",
                4_990,
                limits(5, 5, 5, 1, 1),
                allowances(3, 5, 1, 0),
            )?,
            PlanDefinition::new(
                "ESSENTIAL",
                "Essencial",
                5_990,
                limits(5, 10, 5, 2, 1),
                allowances(3, 10, 1, 0),
            )?,
            PlanDefinition::new(
                "PROFESSIONAL",
                "Profissional",
                14_990,
                limits(20, 40, 20, 5, 3),
                allowances(10, 20, 5, 1_000),
            )?,
            PlanDefinition::new(
                "ENTERPRISE",
                "Empresarial",
                49_990,
                limits(-1, -1, -1, -1, -1),
                allowances(-1, -1, -1, -1),
            )?,
        ]))
    }
}

#[async_trait]
impl PlanCatalog for StaticPlanCatalog {
    async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>> {
        Ok(self.plans.values().cloned().collect())
    }

    async fn find_plan(&self, plan_name: &str) -> AppResult<Option<PlanDefinition>> {
        Ok(self.plans.get(plan_name.trim().to_uppercase().as_str()).cloned())
    }
}

fn limits(properties: i64, tenants: i64, owners: i64, brokers: i64, managers: i64) -> PlanLimits {
    PlanLimits {
        properties: Some(PlanLimit::from(properties)),
        tenants: Some(PlanLimit::from(tenants)),
        owners: Some(PlanLimit::from(owners)),
        brokers: Some(PlanLimit::from(brokers)),
        managers: Some(PlanLimit::from(managers)),
    }
}

fn allowances(inspections: i64, searches: i64, settlements: i64, api_calls: i64) -> FreeAllowances {
    FreeAllowances {
        inspections: Some(PlanLimit::from(inspections)),
        searches: Some(PlanLimit::from(searches)),
        settlements: Some(PlanLimit::from(settlements)),
        api_calls: Some(PlanLimit::from(api_calls)),
    }
}

#[cfg(test)]
mod tests {
    use imovel_application::PlanCatalog;
    use imovel_domain::{PlanLimit, PlanTier};

    use super::StaticPlanCatalog;

    #[tokio::test]
    async fn standard_catalog_covers_every_tier() {
        let catalog = StaticPlanCatalog::standard().unwrap_or_default();
        let plans = catalog.list_plans().await.unwrap_or_default();

        assert_eq!(plans.len(), PlanTier::all().len());
        assert!(plans.iter().all(|plan| plan.tier().is_some()));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let catalog = StaticPlanCatalog::standard().unwrap_or_default();
        let professional = catalog.find_plan("professional").await.ok().flatten();

        assert_eq!(
            professional.map(|plan| plan.limits().properties),
            Some(Some(PlanLimit::Capped(20)))
        );
        assert!(matches!(catalog.find_plan("GOLD").await, Ok(None)));
    }

    #[tokio::test]
    async fn enterprise_is_unlimited() {
        let catalog = StaticPlanCatalog::standard().unwrap_or_default();
        let enterprise = catalog.find_plan("ENTERPRISE").await.ok().flatten();

        assert!(enterprise.is_some_and(|plan| {
            plan.limits()
                .properties
                .is_some_and(|limit| limit.is_unlimited())
        }));
    }
}
