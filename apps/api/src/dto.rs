mod access;
mod common;
mod plans;

pub use access::{
    AccessResponse, AnyRoleCheckRequest, PermissionCheckResponse, RoleCheckResponse,
    RolePermissionsResponse,
};
pub use common::HealthResponse;
pub use plans::{
    FreeAllowancesResponse, PlanChangePreviewRequest, PlanChangePreviewResponse,
    PlanComparisonResponse, PlanLimitsResponse, PlanOrderResponse, PlanResponse,
    ResourceCountsDto, UsageSnapshotDto, UserCountsDto,
};
