//! Consecutive-event calculator.
//!
//! The chance of an event happening `N` times in a row is the per-trial
//! probability raised to the `N`th power. Nothing is clamped: an effective
//! probability outside `[0, 1]` propagates into the result unchanged.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::CalcConfig;
use crate::error::OddsResult;
use crate::game::Game;
use crate::modifier::{GameModifier, OddsModifier};
use crate::params::ParameterSource;
use crate::probability::{Orientation, Probability};

/// Probability that an event with per-trial chance `effective` was a
/// success (or a failure) `repetitions` times in a row.
pub fn consecutive_odds(
    effective: Probability,
    orientation: Orientation,
    repetitions: u32,
) -> Probability {
    let oriented = orientation.apply(effective);
    Probability(oriented.value().powf(f64::from(repetitions)))
}

/// A base percentage after its game's modifier has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedOdds {
    /// The game whose rules were applied.
    pub game: Game,
    /// The percentage that was entered.
    pub base_percent: f64,
    /// The modifier bound for this run.
    pub modifier: GameModifier,
    /// The base percentage after the modifier.
    pub effective: Probability,
}

impl AdjustedOdds {
    /// Build `game`'s modifier from `source` and apply it to `base_percent`.
    pub fn new(
        game: Game,
        base_percent: f64,
        config: &CalcConfig,
        source: &mut impl ParameterSource,
    ) -> OddsResult<Self> {
        let modifier = game.modifier(config, source)?;
        let effective = modifier.adjust(base_percent)?;
        if !effective.is_in_range() {
            warn!(
                "{} produced {} from {base_percent}%, which is not a valid probability",
                modifier.name(),
                effective.value()
            );
        }
        Ok(Self {
            game,
            base_percent,
            modifier,
            effective,
        })
    }

    /// Compute the chance of a streak of `repetitions` with these odds.
    pub fn streak(self, orientation: Orientation, repetitions: u32) -> Calculation {
        let result = consecutive_odds(self.effective, orientation, repetitions);
        debug!(
            "{orientation} x{repetitions} at {} -> {}",
            self.effective.value(),
            result.value()
        );
        Calculation {
            odds: self,
            orientation,
            repetitions,
            result,
        }
    }
}

/// One complete calculation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The adjusted single-trial odds.
    #[serde(flatten)]
    pub odds: AdjustedOdds,
    /// Whether the streak counts successes or failures.
    pub orientation: Orientation,
    /// Number of consecutive occurrences.
    pub repetitions: u32,
    /// The final probability of the streak.
    pub result: Probability,
}

impl Calculation {
    /// Run the whole pipeline in one step.
    pub fn run(
        game: Game,
        base_percent: f64,
        orientation: Orientation,
        repetitions: u32,
        config: &CalcConfig,
        source: &mut impl ParameterSource,
    ) -> OddsResult<Self> {
        Ok(AdjustedOdds::new(game, base_percent, config, source)?.streak(orientation, repetitions))
    }

    /// The result as a percentage string without `%`, e.g. `"10.0"`.
    pub fn percent(&self, decimals: u32) -> String {
        self.result.format_percent(decimals)
    }

    /// The line shown to the user, e.g. `Your odds were: 10.0%`.
    pub fn summary(&self, decimals: u32) -> String {
        format!("Your odds were: {}%", self.percent(decimals))
    }
}
