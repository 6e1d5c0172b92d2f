use axum::Json;
use axum::extract::{Extension, Path, State};
use imovel_application::PlanChangeRequest;
use imovel_domain::{Permission, PlanChangeDirection};
use tracing::info;

use crate::dto::{
    PlanChangePreviewRequest, PlanChangePreviewResponse, PlanComparisonResponse,
    PlanOrderResponse, PlanResponse,
};
use crate::error::ApiResult;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[cfg(test)]
mod tests;

pub async fn list_plans_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PlanResponse>>> {
    let service = &state.plan_lifecycle_service;
    let plans = service
        .list_plans()
        .await?
        .iter()
        .map(|plan| PlanResponse::new(plan, service.tier_order(plan.name())))
        .collect();

    Ok(Json(plans))
}

pub async fn plan_order_handler(
    State(state): State<AppState>,
    Path(plan): Path<String>,
) -> Json<PlanOrderResponse> {
    let order = state.plan_lifecycle_service.tier_order(plan.as_str());

    Json(PlanOrderResponse { plan, order })
}

pub async fn compare_plans_handler(
    State(state): State<AppState>,
    Path((current_plan, new_plan)): Path<(String, String)>,
) -> Json<PlanComparisonResponse> {
    let direction = state
        .plan_lifecycle_service
        .classify_change(current_plan.as_str(), new_plan.as_str());

    Json(PlanComparisonResponse {
        current_plan,
        new_plan,
        direction: direction.as_str().to_owned(),
        is_upgrade: direction == PlanChangeDirection::Upgrade,
    })
}

pub async fn preview_plan_change_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<PlanChangePreviewRequest>,
) -> ApiResult<Json<PlanChangePreviewResponse>> {
    state
        .authorization_service
        .require_permission(user.as_ref(), Permission::PlansRead)?;

    let current_plan = payload
        .current_plan
        .or_else(|| user.as_ref().map(|user| user.plan().to_owned()))
        .unwrap_or_default();

    let preview = state
        .plan_lifecycle_service
        .preview_plan_change(PlanChangeRequest {
            current_plan,
            new_plan: payload.new_plan,
            current_usage: payload.usage.into(),
            previously_frozen: payload.previously_frozen.into(),
        })
        .await?;

    info!(
        current_plan = %preview.current_plan,
        new_plan = %preview.new_plan,
        freeze_properties = preview.will_freeze.properties,
        freeze_users = preview.will_freeze.users,
        "plan change previewed"
    );

    Ok(Json(preview.into()))
}
