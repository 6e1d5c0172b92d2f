//! Domain rules: role permissions and plan lifecycle.
//!
//! Everything here is pure and synchronous. Tables are constants or are
//! built once at start-up and never mutated.

#![forbid(unsafe_code)]

mod dashboard;
mod permission_matrix;
mod plan;
mod plan_change;
mod plan_limits;
mod resource_state;
mod role;
mod security;
mod user;

pub use dashboard::Dashboard;
pub use permission_matrix::PermissionMatrix;
pub use plan::{
    BASIC_ESSENTIAL_RANK, PlanChangeDirection, PlanTier, UNKNOWN_PLAN_RANK, is_upgrade,
    tier_order,
};
pub use plan_change::{
    PlanChangeInputs, PlanChangePreview, ResourceCounts, UsageSnapshot, UserCounts,
    preview_change,
};
pub use plan_limits::{FreeAllowances, PlanDefinition, PlanLimit, PlanLimits, UNLIMITED_SENTINEL};
pub use resource_state::ResourceState;
pub use role::Role;
pub use security::Permission;
pub use user::{User, UserId};
