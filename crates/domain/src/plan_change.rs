//! Plan change preview.
//!
//! The preview only counts how many resources freeze or unfreeze. Which
//! records are picked (the oldest stay active) is decided by the remote API
//! when the change is committed.

use serde::{Deserialize, Serialize};

use crate::{PlanChangeDirection, PlanLimit, PlanLimits};

/// Active user accounts per category, or per-category deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCounts {
    /// Tenant accounts.
    pub tenants: u32,
    /// Owner accounts.
    pub owners: u32,
    /// Broker accounts.
    pub brokers: u32,
    /// Manager accounts.
    pub managers: u32,
}

impl UserCounts {
    /// Sums every category.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.tenants
            .saturating_add(self.owners)
            .saturating_add(self.brokers)
            .saturating_add(self.managers)
    }
}

/// Current active resource counts under a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageSnapshot {
    /// Active properties and contracts.
    pub properties: u32,
    /// Active users per category.
    pub users: UserCounts,
}

/// Property and user counts, used for freeze/unfreeze results and previously frozen state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCounts {
    /// Properties.
    pub properties: u32,
    /// Users across all categories.
    pub users: u32,
}

impl ResourceCounts {
    /// Returns whether both counts are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties == 0 && self.users == 0
    }
}

/// Result of comparing a plan change against current usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanChangePreview {
    /// Plan the account is on.
    pub current_plan: String,
    /// Plan being requested.
    pub new_plan: String,
    /// Caps of the current plan.
    pub current_limits: PlanLimits,
    /// Caps of the requested plan.
    pub new_limits: PlanLimits,
    /// Usage the preview was computed from.
    pub current_usage: UsageSnapshot,
    /// Resources that become frozen.
    pub will_freeze: ResourceCounts,
    /// Previously frozen resources that become active again.
    pub will_unfreeze: ResourceCounts,
    /// Users that become frozen, per category.
    pub user_freeze_breakdown: UserCounts,
    /// Rank comparison of the two plans.
    pub direction: PlanChangeDirection,
    /// Whether the new plan ranks strictly higher.
    pub is_upgrade: bool,
}

impl PlanChangePreview {
    /// Returns whether confirming the change freezes anything.
    #[must_use]
    pub fn requires_freeze_warning(&self) -> bool {
        !self.will_freeze.is_empty()
    }
}

/// Inputs of [`preview_change`].
#[derive(Debug, Clone, Copy)]
pub struct PlanChangeInputs<'a> {
    /// Plan the account is on.
    pub current_plan: &'a str,
    /// Plan being requested.
    pub new_plan: &'a str,
    /// Caps of the current plan.
    pub current_limits: &'a PlanLimits,
    /// Caps of the requested plan.
    pub new_limits: &'a PlanLimits,
    /// Active resource counts.
    pub current_usage: &'a UsageSnapshot,
    /// Counts frozen by earlier plan changes.
    pub previously_frozen: &'a ResourceCounts,
}

/// Computes the freeze/unfreeze counts of a plan change.
#[must_use]
pub fn preview_change(inputs: PlanChangeInputs<'_>) -> PlanChangePreview {
    let PlanChangeInputs {
        current_plan,
        new_plan,
        current_limits,
        new_limits,
        current_usage,
        previously_frozen,
    } = inputs;

    let user_freeze_breakdown = UserCounts {
        tenants: overflow(new_limits.tenants, current_usage.users.tenants),
        owners: overflow(new_limits.owners, current_usage.users.owners),
        brokers: overflow(new_limits.brokers, current_usage.users.brokers),
        managers: overflow(new_limits.managers, current_usage.users.managers),
    };

    let will_freeze = ResourceCounts {
        properties: overflow(new_limits.properties, current_usage.properties),
        users: user_freeze_breakdown.total(),
    };

    let user_limits_configured = [
        new_limits.tenants,
        new_limits.owners,
        new_limits.brokers,
        new_limits.managers,
    ]
    .iter()
    .all(Option::is_some);

    let will_unfreeze = ResourceCounts {
        properties: unfreeze(
            new_limits.properties.is_some(),
            previously_frozen.properties,
            will_freeze.properties,
        ),
        users: unfreeze(
            user_limits_configured,
            previously_frozen.users,
            will_freeze.users,
        ),
    };

    let direction = PlanChangeDirection::classify(current_plan, new_plan);

    PlanChangePreview {
        current_plan: current_plan.to_owned(),
        new_plan: new_plan.to_owned(),
        current_limits: *current_limits,
        new_limits: *new_limits,
        current_usage: *current_usage,
        will_freeze,
        will_unfreeze,
        user_freeze_breakdown,
        direction,
        is_upgrade: direction == PlanChangeDirection::Upgrade,
    }
}

fn overflow(limit: Option<PlanLimit>, usage: u32) -> u32 {
    limit.map_or(0, |limit| limit.overflow(usage))
}

/// Nothing unfreezes unless the new plan actually defines the limit.
fn unfreeze(limit_configured: bool, previously_frozen: u32, will_freeze: u32) -> u32 {
    if limit_configured {
        previously_frozen.saturating_sub(will_freeze)
    } else {
        0
    }
}
