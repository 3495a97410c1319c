//! The registry of supported games.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::error::{OddsError, OddsResult};
use crate::modifier::{GameModifier, LootedDrop, LootingTable, LuckCurve};
use crate::params::{DropRarity, ParameterSource};

/// A game whose drop rules Streak knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    /// Terraria: luck shifts odds along a rarity curve.
    Terraria,
    /// Minecraft: the Looting enchantment boosts drops.
    Minecraft,
}

impl Game {
    /// Parse a game name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "terraria" => Some(Self::Terraria),
            "minecraft" => Some(Self::Minecraft),
            _ => None,
        }
    }

    /// All registered games.
    pub fn all() -> &'static [Self] {
        &[Self::Terraria, Self::Minecraft]
    }

    /// The parameters this game's modifier asks for, in prompt order.
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Terraria => &["luck"],
            Self::Minecraft => &["tier", "rarity", "drops (common only)"],
        }
    }

    /// Name of the modifier rule this game uses.
    pub fn rule(self) -> &'static str {
        match self {
            Self::Terraria => "luck curve",
            Self::Minecraft => "looting table",
        }
    }

    /// Build this game's modifier, asking `source` for its parameters.
    pub fn modifier(
        self,
        config: &CalcConfig,
        source: &mut impl ParameterSource,
    ) -> OddsResult<GameModifier> {
        let modifier = match self {
            Self::Terraria => GameModifier::Luck(LuckCurve::new(source.luck()?)),
            Self::Minecraft => {
                let tier = source.looting_tier(config.tier_policy)?;
                let drop = match source.drop_rarity()? {
                    DropRarity::Rare => LootedDrop::Rare,
                    DropRarity::Common => LootedDrop::Common {
                        average_drops: source.average_drops()?,
                    },
                };
                GameModifier::Looting(LootingTable::new(tier, drop, config.rare_bonus))
            }
        };
        debug!("{self}: bound {modifier:?}");
        Ok(modifier)
    }
}

impl std::str::FromStr for Game {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| OddsError::UnknownGame(s.to_string()))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terraria => write!(f, "Terraria"),
            Self::Minecraft => write!(f, "Minecraft"),
        }
    }
}
