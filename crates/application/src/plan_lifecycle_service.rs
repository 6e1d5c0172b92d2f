//! Plan catalog listing and plan change previews.

use std::sync::Arc;

use imovel_core::{AppError, AppResult};
use imovel_domain::{
    PlanChangeDirection, PlanChangeInputs, PlanChangePreview, PlanDefinition, PlanLimits,
    ResourceCounts, UsageSnapshot, preview_change, tier_order,
};
use tracing::warn;

use crate::PlanCatalog;

#[cfg(test)]
mod tests;

/// Input for a plan change preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanChangeRequest {
    /// Plan the account is on.
    pub current_plan: String,
    /// Plan the user picked.
    pub new_plan: String,
    /// Active resource counts reported by the usage API.
    pub current_usage: UsageSnapshot,
    /// Counts frozen by earlier plan changes.
    pub previously_frozen: ResourceCounts,
}

/// Application service for plan tiers and change previews.
#[derive(Clone)]
pub struct PlanLifecycleService {
    catalog: Arc<dyn PlanCatalog>,
}

impl PlanLifecycleService {
    /// Creates a service over a plan catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn PlanCatalog>) -> Self {
        Self { catalog }
    }

    /// Lists catalog plans from the lowest to the highest tier.
    pub async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>> {
        let mut plans = self.catalog.list_plans().await?;
        plans.sort_by(|left, right| {
            tier_order(left.name())
                .cmp(&tier_order(right.name()))
                .then_with(|| left.name().cmp(right.name()))
        });

        Ok(plans)
    }

    /// Returns the rank of a plan name.
    #[must_use]
    pub fn tier_order(&self, plan_name: &str) -> u8 {
        tier_order(plan_name)
    }

    /// Classifies a change between two plans.
    #[must_use]
    pub fn classify_change(&self, current_plan: &str, new_plan: &str) -> PlanChangeDirection {
        PlanChangeDirection::classify(current_plan, new_plan)
    }

    /// Previews the freeze/unfreeze counts of a plan change.
    ///
    /// Plans missing from the catalog are previewed with empty limits, so the
    /// confirmation dialog still renders with zero counts.
    pub async fn preview_plan_change(
        &self,
        request: PlanChangeRequest,
    ) -> AppResult<PlanChangePreview> {
        let current_plan = normalize_plan_name(request.current_plan.as_str());
        let new_plan = normalize_plan_name(request.new_plan.as_str());
        if new_plan.is_empty() {
            return Err(AppError::Validation(
                "new plan name must not be empty".to_owned(),
            ));
        }

        let current_limits = self.limits_for(current_plan.as_str()).await?;
        let new_limits = self.limits_for(new_plan.as_str()).await?;

        Ok(preview_change(PlanChangeInputs {
            current_plan: current_plan.as_str(),
            new_plan: new_plan.as_str(),
            current_limits: &current_limits,
            new_limits: &new_limits,
            current_usage: &request.current_usage,
            previously_frozen: &request.previously_frozen,
        }))
    }

    async fn limits_for(&self, plan_name: &str) -> AppResult<PlanLimits> {
        if plan_name.is_empty() {
            return Ok(PlanLimits::default());
        }

        match self.catalog.find_plan(plan_name).await? {
            Some(definition) => Ok(*definition.limits()),
            None => {
                warn!(plan = %plan_name, "plan missing from catalog, previewing with empty limits");
                Ok(PlanLimits::default())
            }
        }
    }
}

fn normalize_plan_name(value: &str) -> String {
    value.trim().to_uppercase()
}
