//! Odds modifiers: game rules that turn a base percentage into an effective
//! probability.
//!
//! Each game binds one modifier at construction time:
//! - **Luck curve** (Terraria): bias along a harmonic rarity curve
//! - **Looting table** (Minecraft): flat rare bonus or table-driven common bonus

pub mod looting;
pub mod luck;

pub use looting::{LootedDrop, LootingTable, looting_multiplier};
pub use luck::{LuckCurve, harmonic_sum};

use serde::{Deserialize, Serialize};

use crate::error::OddsResult;
use crate::probability::Probability;

/// A rule that adjusts a base percentage into an effective probability.
pub trait OddsModifier {
    /// Short human-readable name of the rule.
    fn name(&self) -> &'static str;

    /// Adjust a base percentage (e.g. `10.0` for 10%) into a probability.
    fn adjust(&self, base_percent: f64) -> OddsResult<Probability>;
}

/// The modifier bound to a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameModifier {
    /// Terraria-style luck curve.
    Luck(LuckCurve),
    /// Minecraft-style looting table.
    Looting(LootingTable),
}

impl OddsModifier for GameModifier {
    fn name(&self) -> &'static str {
        match self {
            Self::Luck(m) => m.name(),
            Self::Looting(m) => m.name(),
        }
    }

    fn adjust(&self, base_percent: f64) -> OddsResult<Probability> {
        match self {
            Self::Luck(m) => m.adjust(base_percent),
            Self::Looting(m) => m.adjust(base_percent),
        }
    }
}

impl From<LuckCurve> for GameModifier {
    fn from(m: LuckCurve) -> Self {
        Self::Luck(m)
    }
}

impl From<LootingTable> for GameModifier {
    fn from(m: LootingTable) -> Self {
        Self::Looting(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RareBonus;

    #[test]
    fn dispatches_to_bound_variant() {
        let luck: GameModifier = LuckCurve::new(0.0).into();
        assert_eq!(luck.name(), "luck curve");
        assert_eq!(luck.adjust(10.0).unwrap(), Probability(0.1));

        let looting: GameModifier =
            LootingTable::new(2, LootedDrop::Rare, RareBonus::Literal).into();
        assert_eq!(looting.name(), "looting table");
        assert!((looting.adjust(20.0).unwrap().value() - 2.2).abs() < 1e-12);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let luck = GameModifier::Luck(LuckCurve::new(0.5));
        let json = serde_json::to_value(luck).unwrap();
        assert_eq!(json["kind"], "luck");
        assert_eq!(json["luck"], 0.5);
    }
}
