//! Subscription tiers and their ordering.
//!
//! Order decides whether a plan change is an upgrade. BASIC and ESSENTIAL
//! share one rank; changing between them is lateral.

use serde::{Deserialize, Serialize};

/// Rank shared by the BASIC and ESSENTIAL tiers.
pub const BASIC_ESSENTIAL_RANK: u8 = 1;

/// Rank assumed for plan names outside the catalogue.
pub const UNKNOWN_PLAN_RANK: u8 = 0;

/// Catalogued subscription tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanTier {
    /// Entry tier without charge.
    Free,
    /// Paid entry tier.
    Basic,
    /// Alias rank of [`PlanTier::Basic`].
    Essential,
    /// Tier for growing agencies.
    Professional,
    /// Top tier.
    Enterprise,
}

impl PlanTier {
    /// Returns the canonical plan name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Basic => "BASIC",
            Self::Essential => "ESSENTIAL",
            Self::Professional => "PROFESSIONAL",
            Self::Enterprise => "ENTERPRISE",
        }
    }

    /// Returns the tier rank.
    #[must_use]
    pub fn order(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Basic | Self::Essential => BASIC_ESSENTIAL_RANK,
            Self::Professional => 2,
            Self::Enterprise => 3,
        }
    }

    /// Returns every catalogued tier.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Free,
            Self::Basic,
            Self::Essential,
            Self::Professional,
            Self::Enterprise,
        ]
    }

    /// Case-insensitive lookup of a plan name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(value))
    }
}

/// Returns the rank of a plan name; unknown names rank as the free tier.
#[must_use]
pub fn tier_order(plan_name: &str) -> u8 {
    PlanTier::parse(plan_name).map_or(UNKNOWN_PLAN_RANK, |tier| tier.order())
}

/// Returns whether moving from `current_plan` to `new_plan` raises the rank.
#[must_use]
pub fn is_upgrade(current_plan: &str, new_plan: &str) -> bool {
    tier_order(new_plan) > tier_order(current_plan)
}

/// Classification of a plan change by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChangeDirection {
    /// New plan ranks higher.
    Upgrade,
    /// New plan ranks lower.
    Downgrade,
    /// Both plans share a rank.
    Lateral,
}

impl PlanChangeDirection {
    /// Classifies a change between two plan names.
    #[must_use]
    pub fn classify(current_plan: &str, new_plan: &str) -> Self {
        match tier_order(new_plan).cmp(&tier_order(current_plan)) {
            std::cmp::Ordering::Greater => Self::Upgrade,
            std::cmp::Ordering::Less => Self::Downgrade,
            std::cmp::Ordering::Equal => Self::Lateral,
        }
    }

    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upgrade => "upgrade",
            Self::Downgrade => "downgrade",
            Self::Lateral => "lateral",
        }
    }
}
