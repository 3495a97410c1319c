//! Probabilities and the success/failure framing of a streak.
//!
//! A [`Probability`] is a plain `f64` that is *meant* to lie in `[0, 1]`.
//! Nothing clamps it: a modifier that pushes the value past 1 produces a
//! result above 100%, and that result is reported as-is.

use serde::{Deserialize, Serialize};

/// A single-trial probability, normally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(pub f64);

impl Probability {
    /// Certain success.
    pub const CERTAIN: Self = Self(1.0);

    /// Sentinel for a combination the rules have no entry for.
    pub const IMPOSSIBLE: Self = Self(0.0);

    /// Convert a percentage (e.g. `10.0` for 10%) into a probability.
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// The raw value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The probability of the complementary event, `1 - p`.
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }

    /// Whether the value lies in `[0, 1]`.
    pub fn is_in_range(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }

    /// The value as a percentage rounded to `decimals` places.
    ///
    /// Rounds the exact binary value of `p * 100`, with ties going to the even
    /// digit, so `0.125` rounds to `0.12`.
    pub fn rounded_percent(self, decimals: u32) -> f64 {
        let percent = self.0 * 100.0;
        format!("{percent:.*}", decimals as usize)
            .parse()
            .unwrap_or(percent)
    }

    /// Format as a percentage rounded to `decimals` places, without the `%`.
    ///
    /// Always keeps a fractional part, so whole numbers print as `10.0`.
    /// Values below `1e-4` or from `1e16` up use exponent notation with a
    /// signed, two-digit exponent (`1e-05`, `1e+20`).
    pub fn format_percent(self, decimals: u32) -> String {
        shortest_repr(self.rounded_percent(decimals))
    }
}

/// Shortest round-trip representation of `value`, written with a signed
/// exponent of at least two digits.
fn shortest_repr(value: f64) -> String {
    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.format_percent(2))
    }
}

/// Whether the streak counts consecutive successes or consecutive failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// The event happened every time.
    Success,
    /// The event failed every time; uses `1 - p` per trial.
    Failure,
}

impl Orientation {
    /// Parse from user input by its first letter, so `s`, `S`, `success`
    /// and `Succeeded` all select [`Orientation::Success`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().chars().next()?.to_ascii_lowercase() {
            's' => Some(Self::Success),
            'f' => Some(Self::Failure),
            _ => None,
        }
    }

    /// Orient a per-trial probability.
    pub fn apply(self, p: Probability) -> Probability {
        match self {
            Self::Success => p,
            Self::Failure => p.complement(),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}
