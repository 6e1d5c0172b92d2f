use imovel_domain::{
    FreeAllowances, PlanChangePreview, PlanDefinition, PlanLimit, PlanLimits, ResourceCounts,
    UsageSnapshot, UserCounts,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// API representation of a plan.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-response.ts"
)]
pub struct PlanResponse {
    pub name: String,
    pub display_name: String,
    #[ts(type = "number")]
    pub price_cents: u64,
    pub order: u8,
    pub limits: PlanLimitsResponse,
    pub allowances: FreeAllowancesResponse,
}

impl PlanResponse {
    #[must_use]
    pub fn new(plan: &PlanDefinition, order: u8) -> Self {
        Self {
            name: plan.name().to_owned(),
            display_name: plan.display_name().to_owned(),
            price_cents: plan.price_cents(),
            order,
            limits: PlanLimitsResponse::from(*plan.limits()),
            allowances: FreeAllowancesResponse::from(*plan.allowances()),
        }
    }
}

/// Plan caps. `-1` means unlimited, `null` means not configured.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-limits-response.ts"
)]
pub struct PlanLimitsResponse {
    #[ts(type = "number | null")]
    pub properties: Option<i64>,
    #[ts(type = "number | null")]
    pub tenants: Option<i64>,
    #[ts(type = "number | null")]
    pub owners: Option<i64>,
    #[ts(type = "number | null")]
    pub brokers: Option<i64>,
    #[ts(type = "number | null")]
    pub managers: Option<i64>,
}

impl From<PlanLimits> for PlanLimitsResponse {
    fn from(value: PlanLimits) -> Self {
        Self {
            properties: limit_value(value.properties),
            tenants: limit_value(value.tenants),
            owners: limit_value(value.owners),
            brokers: limit_value(value.brokers),
            managers: limit_value(value.managers),
        }
    }
}

/// Free monthly allowances of a plan.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/free-allowances-response.ts"
)]
pub struct FreeAllowancesResponse {
    #[ts(type = "number | null")]
    pub inspections: Option<i64>,
    #[ts(type = "number | null")]
    pub searches: Option<i64>,
    #[ts(type = "number | null")]
    pub settlements: Option<i64>,
    #[ts(type = "number | null")]
    pub api_calls: Option<i64>,
}

impl From<FreeAllowances> for FreeAllowancesResponse {
    fn from(value: FreeAllowances) -> Self {
        Self {
            inspections: limit_value(value.inspections),
            searches: limit_value(value.searches),
            settlements: limit_value(value.settlements),
            api_calls: limit_value(value.api_calls),
        }
    }
}

/// Rank of a plan name.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-order-response.ts"
)]
pub struct PlanOrderResponse {
    pub plan: String,
    pub order: u8,
}

/// Rank comparison between two plans.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-comparison-response.ts"
)]
pub struct PlanComparisonResponse {
    pub current_plan: String,
    pub new_plan: String,
    pub direction: String,
    pub is_upgrade: bool,
}

/// User counts per category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-counts-dto.ts"
)]
pub struct UserCountsDto {
    pub tenants: u32,
    pub owners: u32,
    pub brokers: u32,
    pub managers: u32,
}

impl From<UserCountsDto> for UserCounts {
    fn from(value: UserCountsDto) -> Self {
        Self {
            tenants: value.tenants,
            owners: value.owners,
            brokers: value.brokers,
            managers: value.managers,
        }
    }
}

impl From<UserCounts> for UserCountsDto {
    fn from(value: UserCounts) -> Self {
        Self {
            tenants: value.tenants,
            owners: value.owners,
            brokers: value.brokers,
            managers: value.managers,
        }
    }
}

/// Active resource counts under the current plan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/usage-snapshot-dto.ts"
)]
pub struct UsageSnapshotDto {
    pub properties: u32,
    pub users: UserCountsDto,
}

impl From<UsageSnapshotDto> for UsageSnapshot {
    fn from(value: UsageSnapshotDto) -> Self {
        Self {
            properties: value.properties,
            users: value.users.into(),
        }
    }
}

impl From<UsageSnapshot> for UsageSnapshotDto {
    fn from(value: UsageSnapshot) -> Self {
        Self {
            properties: value.properties,
            users: value.users.into(),
        }
    }
}

/// Property and user totals.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/resource-counts-dto.ts"
)]
pub struct ResourceCountsDto {
    pub properties: u32,
    pub users: u32,
}

impl From<ResourceCountsDto> for ResourceCounts {
    fn from(value: ResourceCountsDto) -> Self {
        Self {
            properties: value.properties,
            users: value.users,
        }
    }
}

impl From<ResourceCounts> for ResourceCountsDto {
    fn from(value: ResourceCounts) -> Self {
        Self {
            properties: value.properties,
            users: value.users,
        }
    }
}

/// Incoming payload for a plan change preview.
///
/// `current_plan` defaults to the caller's plan when omitted.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-change-preview-request.ts"
)]
pub struct PlanChangePreviewRequest {
    #[serde(default)]
    pub current_plan: Option<String>,
    pub new_plan: String,
    #[serde(default)]
    pub usage: UsageSnapshotDto,
    #[serde(default)]
    pub previously_frozen: ResourceCountsDto,
}

/// API representation of a plan change preview.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/plan-change-preview-response.ts"
)]
pub struct PlanChangePreviewResponse {
    pub current_plan: String,
    pub new_plan: String,
    pub current_limits: PlanLimitsResponse,
    pub new_limits: PlanLimitsResponse,
    pub current_usage: UsageSnapshotDto,
    pub will_freeze: ResourceCountsDto,
    pub will_unfreeze: ResourceCountsDto,
    pub user_freeze_breakdown: UserCountsDto,
    pub direction: String,
    pub is_upgrade: bool,
    pub requires_freeze_warning: bool,
}

impl From<PlanChangePreview> for PlanChangePreviewResponse {
    fn from(value: PlanChangePreview) -> Self {
        let requires_freeze_warning = value.requires_freeze_warning();

        Self {
            current_plan: value.current_plan,
            new_plan: value.new_plan,
            current_limits: value.current_limits.into(),
            new_limits: value.new_limits.into(),
            current_usage: value.current_usage.into(),
            will_freeze: value.will_freeze.into(),
            will_unfreeze: value.will_unfreeze.into(),
            user_freeze_breakdown: value.user_freeze_breakdown.into(),
            direction: value.direction.as_str().to_owned(),
            is_upgrade: value.is_upgrade,
            requires_freeze_warning,
        }
    }
}

fn limit_value(limit: Option<PlanLimit>) -> Option<i64> {
    limit.map(i64::from)
}
