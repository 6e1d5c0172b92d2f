use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use imovel_core::{AppError, AppResult};
use imovel_domain::{
    FreeAllowances, PlanChangeDirection, PlanDefinition, PlanLimit, PlanLimits, ResourceCounts,
    UsageSnapshot, UserCounts,
};
use tokio::sync::Mutex;

use crate::PlanCatalog;

use super::{PlanChangeRequest, PlanLifecycleService};

#[derive(Default)]
struct FakePlanCatalog {
    plans: HashMap<String, PlanDefinition>,
    lookups: Mutex<Vec<String>>,
    fail: bool,
}

impl FakePlanCatalog {
    fn with_plans(plans: Vec<PlanDefinition>) -> Self {
        Self {
            plans: plans
                .into_iter()
                .map(|plan| (plan.name().to_owned(), plan))
                .collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl PlanCatalog for FakePlanCatalog {
    async fn list_plans(&self) -> AppResult<Vec<PlanDefinition>> {
        if self.fail {
            return Err(AppError::Internal("catalog offline".to_owned()));
        }
        Ok(self.plans.values().cloned().collect())
    }

    async fn find_plan(&self, plan_name: &str) -> AppResult<Option<PlanDefinition>> {
        if self.fail {
            return Err(AppError::Internal("catalog offline".to_owned()));
        }
        self.lookups.lock().await.push(plan_name.to_owned());
        Ok(self.plans.get(plan_name).cloned())
    }
}

fn plan(name: &str, properties: i64) -> PlanDefinition {
    PlanDefinition::new(
        name,
        name,
        0,
        PlanLimits {
            properties: Some(PlanLimit::from(properties)),
            tenants: Some(PlanLimit::Capped(2)),
            ..PlanLimits::default()
        },
        FreeAllowances::default(),
    )
    .unwrap_or_else(|_| unreachable!("fixture plan names are non-empty"))
}

fn request(current_plan: &str, new_plan: &str, properties: u32) -> PlanChangeRequest {
    PlanChangeRequest {
        current_plan: current_plan.to_owned(),
        new_plan: new_plan.to_owned(),
        current_usage: UsageSnapshot {
            properties,
            users: UserCounts {
                tenants: 3,
                ..UserCounts::default()
            },
        },
        previously_frozen: ResourceCounts::default(),
    }
}

#[tokio::test]
async fn list_plans_orders_by_tier() {
    let service = PlanLifecycleService::new(Arc::new(FakePlanCatalog::with_plans(vec![
        plan("ENTERPRISE", -1),
        plan("FREE", 1),
        plan("PROFESSIONAL", 20),
        plan("ESSENTIAL", 5),
        plan("BASIC", 5),
    ])));

    let names: Vec<String> = service
        .list_plans()
        .await
        .unwrap_or_default()
        .iter()
        .map(|plan| plan.name().to_owned())
        .collect();

    assert_eq!(
        names,
        vec!["FREE", "BASIC", "ESSENTIAL", "PROFESSIONAL", "ENTERPRISE"]
    );
}

#[tokio::test]
async fn preview_downgrade_uses_catalog_limits() {
    let service = PlanLifecycleService::new(Arc::new(FakePlanCatalog::with_plans(vec![
        plan("PROFESSIONAL", 20),
        plan("FREE", 1),
    ])));

    let preview = service
        .preview_plan_change(request("professional", " free ", 8))
        .await;
    assert!(preview.is_ok());
    let Ok(preview) = preview else {
        return;
    };

    assert_eq!(preview.current_plan, "PROFESSIONAL");
    assert_eq!(preview.new_plan, "FREE");
    assert_eq!(preview.will_freeze.properties, 7);
    assert_eq!(preview.will_freeze.users, 1);
    assert!(!preview.is_upgrade);
    assert_eq!(preview.direction, PlanChangeDirection::Downgrade);
}

#[tokio::test]
async fn missing_definition_degrades_to_zero_preview() {
    let catalog = Arc::new(FakePlanCatalog::with_plans(vec![plan("FREE", 1)]));
    let service = PlanLifecycleService::new(catalog.clone());

    let mut change = request("FREE", "DIAMOND", 40);
    change.previously_frozen = ResourceCounts {
        properties: 9,
        users: 4,
    };

    let preview = service.preview_plan_change(change).await;
    assert!(preview.is_ok());
    let Ok(preview) = preview else {
        return;
    };

    assert!(preview.will_freeze.is_empty());
    assert!(preview.will_unfreeze.is_empty());
    assert_eq!(preview.new_limits, PlanLimits::default());
    assert_eq!(
        catalog.lookups.lock().await.as_slice(),
        ["FREE".to_owned(), "DIAMOND".to_owned()]
    );
}

#[tokio::test]
async fn blank_new_plan_is_rejected() {
    let service = PlanLifecycleService::new(Arc::new(FakePlanCatalog::default()));

    let result = service.preview_plan_change(request("FREE", "   ", 1)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn blank_current_plan_skips_lookup() {
    let catalog = Arc::new(FakePlanCatalog::with_plans(vec![plan("BASIC", 5)]));
    let service = PlanLifecycleService::new(catalog.clone());

    let preview = service.preview_plan_change(request("", "BASIC", 2)).await;
    assert!(preview.is_ok());
    assert_eq!(catalog.lookups.lock().await.as_slice(), ["BASIC".to_owned()]);
}

#[tokio::test]
async fn catalog_failure_propagates() {
    let service = PlanLifecycleService::new(Arc::new(FakePlanCatalog {
        fail: true,
        ..FakePlanCatalog::default()
    }));

    let result = service
        .preview_plan_change(request("FREE", "BASIC", 1))
        .await;
    assert!(matches!(result, Err(AppError::Internal(_))));
    assert!(service.list_plans().await.is_err());
}

#[test]
fn classification_helpers_delegate_to_tier_table() {
    let service = PlanLifecycleService::new(Arc::new(FakePlanCatalog::default()));

    assert_eq!(service.tier_order("enterprise"), 3);
    assert_eq!(
        service.classify_change("BASIC", "ESSENTIAL"),
        PlanChangeDirection::Lateral
    );
}
