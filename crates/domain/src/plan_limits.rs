use imovel_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::PlanTier;

/// Wire value meaning "no limit".
pub const UNLIMITED_SENTINEL: i64 = -1;

/// One numeric plan limit.
///
/// On the wire a limit is an integer where `-1` means unlimited. Other
/// negative values are malformed and read as unlimited, which never causes
/// a freeze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum PlanLimit {
    /// No limit applies.
    Unlimited,
    /// At most this many resources stay active.
    Capped(u32),
}

impl PlanLimit {
    /// Returns whether the limit is unlimited.
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Returns how many of `usage` resources exceed this limit.
    #[must_use]
    pub fn overflow(&self, usage: u32) -> u32 {
        match self {
            Self::Unlimited => 0,
            Self::Capped(limit) => usage.saturating_sub(*limit),
        }
    }
}

impl From<i64> for PlanLimit {
    fn from(value: i64) -> Self {
        if value < 0 {
            return Self::Unlimited;
        }

        Self::Capped(u32::try_from(value).unwrap_or(u32::MAX))
    }
}

impl From<PlanLimit> for i64 {
    fn from(value: PlanLimit) -> Self {
        match value {
            PlanLimit::Unlimited => UNLIMITED_SENTINEL,
            PlanLimit::Capped(limit) => i64::from(limit),
        }
    }
}

/// Resource caps of a plan. Missing fields are `None` and never freeze anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLimits {
    /// Active properties and contracts.
    pub properties: Option<PlanLimit>,
    /// Tenant accounts.
    pub tenants: Option<PlanLimit>,
    /// Owner accounts.
    pub owners: Option<PlanLimit>,
    /// Broker accounts.
    pub brokers: Option<PlanLimit>,
    /// Manager accounts.
    pub managers: Option<PlanLimit>,
}

/// Monthly free-usage counters included in a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeAllowances {
    /// Inspections included.
    pub inspections: Option<PlanLimit>,
    /// Tenant credit searches included.
    pub searches: Option<PlanLimit>,
    /// Contract settlements included.
    pub settlements: Option<PlanLimit>,
    /// API calls included.
    pub api_calls: Option<PlanLimit>,
}

/// Limits, allowances and price of one tier, as published by the plan catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDefinition {
    name: NonEmptyString,
    display_name: String,
    price_cents: u64,
    limits: PlanLimits,
    allowances: FreeAllowances,
}

impl PlanDefinition {
    /// Creates a validated plan definition.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        price_cents: u64,
        limits: PlanLimits,
        allowances: FreeAllowances,
    ) -> AppResult<Self> {
        let name = NonEmptyString::new(name.into().trim().to_uppercase())?;
        let display_name = display_name.into().trim().to_owned();
        let display_name = if display_name.is_empty() {
            name.as_str().to_owned()
        } else {
            display_name
        };

        Ok(Self {
            name,
            display_name,
            price_cents,
            limits,
            allowances,
        })
    }

    /// Returns the plan name, upper-cased.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the label shown to users.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the monthly price in cents.
    #[must_use]
    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    /// Returns the resource caps.
    #[must_use]
    pub fn limits(&self) -> &PlanLimits {
        &self.limits
    }

    /// Returns the free-usage counters.
    #[must_use]
    pub fn allowances(&self) -> &FreeAllowances {
        &self.allowances
    }

    /// Returns the catalogued tier for this plan, if any.
    #[must_use]
    pub fn tier(&self) -> Option<PlanTier> {
        PlanTier::parse(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{FreeAllowances, PlanDefinition, PlanLimit, PlanLimits};
    use crate::PlanTier;

    #[test]
    fn sentinel_deserializes_as_unlimited() {
        let limits: Result<PlanLimits, _> =
            serde_json::from_str(r#"{"properties": -1, "tenants": 10}"#);
        assert!(limits.is_ok());
        let limits = limits.unwrap_or_default();

        assert_eq!(limits.properties, Some(PlanLimit::Unlimited));
        assert_eq!(limits.tenants, Some(PlanLimit::Capped(10)));
        assert_eq!(limits.owners, None);
    }

    #[test]
    fn unlimited_serializes_back_to_sentinel() {
        let encoded = serde_json::to_string(&PlanLimit::Unlimited).unwrap_or_default();
        assert_eq!(encoded, "-1");
    }

    #[test]
    fn malformed_negative_reads_as_unlimited() {
        assert_eq!(PlanLimit::from(-7), PlanLimit::Unlimited);
        assert_eq!(PlanLimit::from(-7).overflow(500), 0);
    }

    #[test]
    fn overflow_never_goes_negative() {
        assert_eq!(PlanLimit::Capped(5).overflow(12), 7);
        assert_eq!(PlanLimit::Capped(5).overflow(3), 0);
    }

    #[test]
    fn definition_normalizes_name_and_resolves_tier() {
        let definition = PlanDefinition::new(
            " professional ",
            "",
            19_900,
            PlanLimits::default(),
            FreeAllowances::default(),
        );
        assert!(definition.is_ok());
        let Ok(definition) = definition else {
            return;
        };

        assert_eq!(definition.name(), "PROFESSIONAL");
        assert_eq!(definition.display_name(), "PROFESSIONAL");
        assert_eq!(definition.tier(), Some(PlanTier::Professional));
    }

    #[test]
    fn definition_rejects_blank_name() {
        let definition = PlanDefinition::new(
            "  ",
            "Nothing",
            0,
            PlanLimits::default(),
            FreeAllowances::default(),
        );
        assert!(definition.is_err());
    }
}
