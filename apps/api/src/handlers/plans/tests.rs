use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use imovel_domain::Role;

use super::{
    compare_plans_handler, list_plans_handler, plan_order_handler, preview_plan_change_handler,
};
use crate::dto::{
    PlanChangePreviewRequest, ResourceCountsDto, UsageSnapshotDto, UserCountsDto,
};
use crate::handlers::test_support::{signed_in, test_state};
use crate::middleware::CurrentUser;

fn downgrade_request() -> PlanChangePreviewRequest {
    PlanChangePreviewRequest {
        current_plan: None,
        new_plan: "basic".to_owned(),
        usage: UsageSnapshotDto {
            properties: 12,
            users: UserCountsDto {
                tenants: 8,
                owners: 2,
                brokers: 3,
                managers: 1,
            },
        },
        previously_frozen: ResourceCountsDto::default(),
    }
}

#[tokio::test]
async fn plans_are_listed_by_tier() {
    let result = list_plans_handler(State(test_state())).await;
    let Ok(Json(plans)) = result else {
        panic!("listing plans should succeed");
    };

    let orders: Vec<u8> = plans.iter().map(|plan| plan.order).collect();
    let mut sorted = orders.clone();
    sorted.sort_unstable();

    assert_eq!(orders, sorted);
    assert_eq!(plans.first().map(|plan| plan.name.as_str()), Some("FREE"));
    assert_eq!(
        plans
            .iter()
            .find(|plan| plan.name == "ENTERPRISE")
            .and_then(|plan| plan.limits.properties),
        Some(-1)
    );
}

#[tokio::test]
async fn plan_order_is_case_insensitive() {
    let Json(order) = plan_order_handler(State(test_state()), Path("professional".to_owned())).await;
    let Json(unknown) = plan_order_handler(State(test_state()), Path("GOLD".to_owned())).await;

    assert_eq!(order.order, 2);
    assert_eq!(unknown.order, 0);
}

#[tokio::test]
async fn basic_and_essential_compare_as_lateral() {
    let Json(comparison) = compare_plans_handler(
        State(test_state()),
        Path(("BASIC".to_owned(), "ESSENTIAL".to_owned())),
    )
    .await;

    assert_eq!(comparison.direction, "lateral");
    assert!(!comparison.is_upgrade);
}

#[tokio::test]
async fn preview_uses_callers_plan_by_default() {
    let result = preview_plan_change_handler(
        State(test_state()),
        Extension(signed_in(Role::AgencyAdmin, "PROFESSIONAL")),
        Json(downgrade_request()),
    )
    .await;
    let Ok(Json(preview)) = result else {
        panic!("preview should succeed");
    };

    assert_eq!(preview.current_plan, "PROFESSIONAL");
    assert_eq!(preview.new_plan, "BASIC");
    assert_eq!(preview.direction, "downgrade");
    assert_eq!(preview.will_freeze.properties, 7);
    assert_eq!(preview.user_freeze_breakdown.tenants, 3);
    assert_eq!(preview.user_freeze_breakdown.owners, 0);
    assert_eq!(preview.user_freeze_breakdown.brokers, 2);
    assert_eq!(preview.will_freeze.users, 5);
    assert!(preview.requires_freeze_warning);
}

#[tokio::test]
async fn preview_requires_an_identity() {
    let result = preview_plan_change_handler(
        State(test_state()),
        Extension(CurrentUser(None)),
        Json(downgrade_request()),
    )
    .await;

    let Err(error) = result else {
        panic!("anonymous preview should be rejected");
    };
    assert_eq!(error.into_response().status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn preview_requires_plans_read() {
    let result = preview_plan_change_handler(
        State(test_state()),
        Extension(signed_in(Role::Inquilino, "FREE")),
        Json(downgrade_request()),
    )
    .await;

    let Err(error) = result else {
        panic!("tenant preview should be rejected");
    };
    assert_eq!(error.into_response().status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn blank_new_plan_is_a_bad_request() {
    let mut request = downgrade_request();
    request.new_plan = "  ".to_owned();

    let result = preview_plan_change_handler(
        State(test_state()),
        Extension(signed_in(Role::Ceo, "ENTERPRISE")),
        Json(request),
    )
    .await;

    let Err(error) = result else {
        panic!("blank plan should be rejected");
    };
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}
