//! Looting-table modifier (Minecraft-style).
//!
//! Rare drops get a flat bonus per looting tier. Common drops are boosted by a
//! fraction of the base chance, looked up by tier and by how many items the
//! mob usually drops.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::RareBonus;
use crate::error::OddsResult;
use crate::modifier::OddsModifier;
use crate::probability::Probability;

/// Common-drop multipliers: `LOOTING_TABLE[tier - 1][average_drops]`.
pub const LOOTING_TABLE: [[f64; 4]; 3] = [
    [0.50, 0.50, 0.00, 0.00],
    [0.25, 0.50, 0.25, 0.00],
    [0.17, 0.33, 0.33, 0.17],
];

/// Look up the common-drop multiplier for a tier (1-3) and drop count (0-3).
pub fn looting_multiplier(tier: i64, average_drops: i64) -> Option<f64> {
    let row = usize::try_from(tier.checked_sub(1)?).ok()?;
    let col = usize::try_from(average_drops).ok()?;
    LOOTING_TABLE.get(row)?.get(col).copied()
}

/// The kind of drop being looted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LootedDrop {
    /// A common drop and the average number of items the mob drops.
    Common {
        /// Column in the looting table.
        average_drops: i64,
    },
    /// A rare drop.
    Rare,
}

/// Looting-table odds modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LootingTable {
    /// Looting enchantment tier.
    pub tier: i64,
    /// What is being dropped.
    pub drop: LootedDrop,
    /// Bonus added per tier to rare drops.
    pub rare_bonus: RareBonus,
}

impl LootingTable {
    /// Create a looting modifier.
    pub fn new(tier: i64, drop: LootedDrop, rare_bonus: RareBonus) -> Self {
        Self {
            tier,
            drop,
            rare_bonus,
        }
    }
}

impl OddsModifier for LootingTable {
    fn name(&self) -> &'static str {
        "looting table"
    }

    fn adjust(&self, base_percent: f64) -> OddsResult<Probability> {
        let base = Probability::from_percent(base_percent).value();
        let adjusted = match self.drop {
            LootedDrop::Rare => base + self.tier as f64 * self.rare_bonus.per_tier(),
            LootedDrop::Common { average_drops } => {
                match looting_multiplier(self.tier, average_drops) {
                    Some(multiplier) => base + base * multiplier,
                    None => {
                        debug!(
                            "looting table has no entry for tier {} with {average_drops} drops",
                            self.tier
                        );
                        return Ok(Probability::IMPOSSIBLE);
                    }
                }
            }
        };
        debug!("looting tier {} ({:?}) -> {adjusted}", self.tier, self.drop);
        Ok(Probability(adjusted))
    }
}
