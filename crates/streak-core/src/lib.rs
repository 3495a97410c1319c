//! Odds engine for Streak.
//!
//! Turns a base percentage into an effective probability through a
//! game-specific modifier (a luck curve for Terraria, a looting table for
//! Minecraft) and raises it to the number of consecutive occurrences.

pub mod calculator;
pub mod config;
pub mod error;
pub mod game;
pub mod modifier;
pub mod params;
pub mod probability;

pub use calculator::{AdjustedOdds, Calculation, consecutive_odds};
pub use config::{CalcConfig, RareBonus, TierPolicy};
pub use error::{OddsError, OddsResult};
pub use game::Game;
pub use modifier::{GameModifier, LootedDrop, LootingTable, LuckCurve, OddsModifier};
pub use params::{DropRarity, FixedParams, ParameterSource};
pub use probability::{Orientation, Probability};
