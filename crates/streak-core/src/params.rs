//! Extra parameters a modifier asks for.
//!
//! Modifiers never read input themselves. They ask a [`ParameterSource`],
//! which may be an interactive prompt, command-line flags, or a fixed set of
//! values in tests.

use serde::{Deserialize, Serialize};

use crate::config::TierPolicy;
use crate::error::{OddsError, OddsResult};

/// Rarity class of a Minecraft drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropRarity {
    /// A common drop, boosted through the looting table.
    Common,
    /// A rare drop, boosted by a flat bonus per tier.
    Rare,
}

impl DropRarity {
    /// Parse from user input by its first letter (`c`/`C`, `r`/`R`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().chars().next()?.to_ascii_uppercase() {
            'C' => Some(Self::Common),
            'R' => Some(Self::Rare),
            _ => None,
        }
    }
}

impl std::fmt::Display for DropRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => write!(f, "common"),
            Self::Rare => write!(f, "rare"),
        }
    }
}

/// Supplies the game-specific parameters a modifier needs.
pub trait ParameterSource {
    /// The luck value for the luck curve.
    fn luck(&mut self) -> OddsResult<f64>;

    /// The looting tier, checked against `policy`.
    fn looting_tier(&mut self, policy: TierPolicy) -> OddsResult<i64>;

    /// Whether the drop is common or rare.
    fn drop_rarity(&mut self) -> OddsResult<DropRarity>;

    /// The average number of items dropped (common drops only).
    fn average_drops(&mut self) -> OddsResult<i64>;
}

/// A parameter source backed by pre-set values.
///
/// Asking for a value that was not set fails with
/// [`OddsError::MissingParameter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedParams {
    /// Luck value.
    pub luck: Option<f64>,
    /// Looting tier.
    pub tier: Option<i64>,
    /// Drop rarity.
    pub rarity: Option<DropRarity>,
    /// Average drop count.
    pub drops: Option<i64>,
}

impl FixedParams {
    /// Set the luck value.
    pub fn with_luck(mut self, luck: f64) -> Self {
        self.luck = Some(luck);
        self
    }

    /// Set the looting tier.
    pub fn with_tier(mut self, tier: i64) -> Self {
        self.tier = Some(tier);
        self
    }

    /// Set the drop rarity.
    pub fn with_rarity(mut self, rarity: DropRarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Set the average drop count.
    pub fn with_drops(mut self, drops: i64) -> Self {
        self.drops = Some(drops);
        self
    }
}

impl ParameterSource for FixedParams {
    fn luck(&mut self) -> OddsResult<f64> {
        self.luck.ok_or(OddsError::MissingParameter("luck"))
    }

    fn looting_tier(&mut self, policy: TierPolicy) -> OddsResult<i64> {
        let tier = self.tier.ok_or(OddsError::MissingParameter("tier"))?;
        policy.check(tier)
    }

    fn drop_rarity(&mut self) -> OddsResult<DropRarity> {
        self.rarity.ok_or(OddsError::MissingParameter("rarity"))
    }

    fn average_drops(&mut self) -> OddsResult<i64> {
        self.drops.ok_or(OddsError::MissingParameter("drops"))
    }
}
