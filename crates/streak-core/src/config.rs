//! Configuration for a calculation run.

use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};

/// Largest number of decimal places a result can be rounded to.
pub const MAX_DECIMALS: u32 = 10;

/// How out-of-range looting tiers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TierPolicy {
    /// Accept any integer tier. Tiers missing from the table fall through to
    /// the "impossible odds" sentinel for common drops.
    #[default]
    Permissive,
    /// Reject tiers outside 0-3.
    Strict,
}

impl TierPolicy {
    /// Check a tier against this policy.
    pub fn check(self, tier: i64) -> OddsResult<i64> {
        match self {
            Self::Permissive => Ok(tier),
            Self::Strict if (0..=3).contains(&tier) => Ok(tier),
            Self::Strict => Err(OddsError::TierOutOfRange(tier)),
        }
    }
}

/// How much probability each looting tier adds to a rare drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RareBonus {
    /// One full unit of probability per tier (`p + tier`).
    #[default]
    Literal,
    /// One percentage point per tier (`p + tier / 100`).
    Scaled,
}

impl RareBonus {
    /// Probability added per looting tier.
    pub fn per_tier(self) -> f64 {
        match self {
            Self::Literal => 1.0,
            Self::Scaled => 0.01,
        }
    }
}

/// Configuration for a calculation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcConfig {
    /// How looting tiers outside the table are handled.
    pub tier_policy: TierPolicy,
    /// Rare-drop bonus per looting tier.
    pub rare_bonus: RareBonus,
    /// Decimal places in the printed percentage.
    pub decimals: u32,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            tier_policy: TierPolicy::Permissive,
            rare_bonus: RareBonus::Literal,
            decimals: 2,
        }
    }
}

impl CalcConfig {
    /// Set the looting tier policy.
    pub fn with_tier_policy(mut self, policy: TierPolicy) -> Self {
        self.tier_policy = policy;
        self
    }

    /// Set the rare-drop bonus.
    pub fn with_rare_bonus(mut self, bonus: RareBonus) -> Self {
        self.rare_bonus = bonus;
        self
    }

    /// Set the number of decimals (clamped to 0-10).
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals.min(MAX_DECIMALS);
        self
    }
}
