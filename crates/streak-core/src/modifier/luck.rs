//! Luck-curve modifier (Terraria-style).
//!
//! A base chance of `p`% is read as "1 in n" with `n = floor(100 / p)`.
//! Positive luck blends the plain `1/n` chance with the average of `1/k` over
//! the lower half of the range (`k` in `n/2 .. n-1`). Negative luck uses the
//! mirrored upper range (`k` in `n .. 2n-1`). Both sums are divided by `n/2`
//! and weighted by `|luck|`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};
use crate::modifier::OddsModifier;
use crate::probability::Probability;

/// Ranges longer than this are summed with the asymptotic expansion of the
/// harmonic numbers instead of term by term.
const EXACT_SUM_LIMIT: u64 = 1_000_000;

/// Largest "1 in n" denominator that an `f64` still holds exactly (2^53).
const MAX_ONE_IN: f64 = 9_007_199_254_740_992.0;

/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// Luck-curve odds modifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LuckCurve {
    /// Signed luck, conventionally in `[-1, 1]`. Zero leaves odds unchanged.
    pub luck: f64,
}

impl LuckCurve {
    /// Create a luck curve for the given luck value.
    pub fn new(luck: f64) -> Self {
        Self { luck }
    }

    fn degenerate(&self, percent: f64) -> OddsError {
        OddsError::DegenerateLuckDomain {
            percent,
            luck: self.luck,
        }
    }
}

impl OddsModifier for LuckCurve {
    fn name(&self) -> &'static str {
        "luck curve"
    }

    fn adjust(&self, base_percent: f64) -> OddsResult<Probability> {
        if self.luck == 0.0 {
            return Ok(Probability::from_percent(base_percent));
        }
        if !base_percent.is_finite() || base_percent <= 0.0 {
            return Err(self.degenerate(base_percent));
        }

        let n = (100.0 / base_percent).floor();
        if !(1.0..=MAX_ONE_IN).contains(&n) {
            return Err(self.degenerate(base_percent));
        }
        // Exact: n is a whole number no larger than 2^53.
        let n_int = n as u64;
        let half = n / 2.0;
        let weight = self.luck.abs();

        // For n = 1 the positive range starts at 0 and ends at 0, so it is
        // empty and only the `1/n` term remains.
        let curve = if self.luck > 0.0 {
            harmonic_sum(half.floor() as u64, n_int - 1)
        } else {
            harmonic_sum(n_int, 2 * n_int - 1)
        };

        let adjusted = curve / half * weight + (1.0 / n) * (1.0 - weight);
        debug!(
            "luck curve: {base_percent}% is 1 in {n_int}, luck {} -> {adjusted}",
            self.luck
        );
        Ok(Probability(adjusted))
    }
}

/// Sum of `1/k` for `k` in `start..end`. An empty or inverted range sums to 0.
///
/// `start` must be at least 1 for a non-empty range.
pub fn harmonic_sum(start: u64, end: u64) -> f64 {
    if start >= end {
        return 0.0;
    }
    if end - start <= EXACT_SUM_LIMIT {
        (start..end).map(|k| 1.0 / k as f64).sum()
    } else {
        harmonic_number(end - 1) - harmonic_number(start - 1)
    }
}

/// Approximate `H(m) = 1 + 1/2 + ... + 1/m` for large `m`.
fn harmonic_number(m: u64) -> f64 {
    if m == 0 {
        return 0.0;
    }
    if m <= EXACT_SUM_LIMIT {
        return (1..=m).map(|k| 1.0 / k as f64).sum();
    }
    let m = m as f64;
    let m2 = m * m;
    m.ln() + EULER_GAMMA + 1.0 / (2.0 * m) - 1.0 / (12.0 * m2) + 1.0 / (120.0 * m2 * m2)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn zero_luck_is_identity() {
        let curve = LuckCurve::new(0.0);
        assert_eq!(curve.adjust(10.0).unwrap(), Probability(0.1));
        assert_eq!(curve.adjust(100.0).unwrap(), Probability(1.0));
        assert_eq!(curve.adjust(0.0).unwrap(), Probability(0.0));
    }

    #[test]
    fn full_positive_luck() {
        // n = 10, sum over k = 5..9, divided by n/2 = 5
        let expected = (1.0 / 5.0 + 1.0 / 6.0 + 1.0 / 7.0 + 1.0 / 8.0) / 5.0;
        let p = LuckCurve::new(1.0).adjust(10.0).unwrap();
        assert!(approx_eq(p.value(), expected));
        assert!(p.value() > 0.1);
    }

    #[test]
    fn full_negative_luck() {
        // n = 10, sum over k = 10..19
        let expected = (10..19).map(|k| 1.0 / k as f64).sum::<f64>() / 5.0;
        let p = LuckCurve::new(-1.0).adjust(10.0).unwrap();
        assert!(approx_eq(p.value(), expected));
        // The upper range has nearly twice as many terms, so this still
        // lands above the unmodified 10%.
        assert!(p.value() > 0.13 && p.value() < 0.134);
    }

    #[test]
    fn partial_luck_blends_with_base() {
        let curve = harmonic_sum(5, 9) / 5.0;
        let expected = curve * 0.25 + 0.1 * 0.75;
        let p = LuckCurve::new(0.25).adjust(10.0).unwrap();
        assert!(approx_eq(p.value(), expected));
    }

    #[test]
    fn base_uses_floor_of_one_in_n() {
        // 30% -> 1 in 3 (floor of 3.33), so the unweighted part is 1/3
        let p = LuckCurve::new(-0.5).adjust(30.0).unwrap();
        let expected = harmonic_sum(3, 5) / 1.5 * 0.5 + (1.0 / 3.0) * 0.5;
        assert!(approx_eq(p.value(), expected));
    }

    #[test]
    fn one_in_two_with_positive_luck_has_empty_curve() {
        let p = LuckCurve::new(1.0).adjust(50.0).unwrap();
        assert_eq!(p, Probability(0.0));
    }

    #[test]
    fn one_in_one_leaves_only_base_term() {
        // Both signs have an empty curve above 50%, leaving 1 - |luck|.
        for luck in [0.5, -0.5] {
            let p = LuckCurve::new(luck).adjust(60.0).unwrap();
            assert!(approx_eq(p.value(), 0.5));
        }
        let p = LuckCurve::new(0.25).adjust(100.0).unwrap();
        assert!(approx_eq(p.value(), 0.75));
        let p = LuckCurve::new(-1.0).adjust(100.0).unwrap();
        assert_eq!(p, Probability(0.0));
    }

    #[test]
    fn non_positive_base_is_degenerate() {
        assert!(LuckCurve::new(1.0).adjust(0.0).is_err());
        assert!(LuckCurve::new(-1.0).adjust(-5.0).is_err());
        assert!(LuckCurve::new(-1.0).adjust(f64::NAN).is_err());
    }

    #[test]
    fn above_hundred_is_degenerate() {
        assert!(LuckCurve::new(-1.0).adjust(150.0).is_err());
    }

    #[test]
    fn base_beyond_exact_one_in_n_is_degenerate() {
        let err = LuckCurve::new(1.0).adjust(1e-15).unwrap_err();
        assert!(matches!(err, OddsError::DegenerateLuckDomain { .. }));
        assert!(LuckCurve::new(-1.0).adjust(1e-20).is_err());
        assert!(LuckCurve::new(-1.0).adjust(1e-13).is_ok());
    }

    #[test]
    fn tiny_base_does_not_hang() {
        let p = LuckCurve::new(1.0).adjust(1e-9).unwrap();
        assert!(p.value().is_finite());
        assert!(p.value() > 0.0);
    }

    #[test]
    fn harmonic_sum_ranges() {
        assert_eq!(harmonic_sum(1, 2), 1.0);
        assert!(approx_eq(harmonic_sum(1, 4), 1.0 + 0.5 + 1.0 / 3.0));
        assert_eq!(harmonic_sum(5, 5), 0.0);
        assert_eq!(harmonic_sum(9, 3), 0.0);
    }

    #[test]
    fn harmonic_sum_asymptotic_matches_exact() {
        let exact: f64 = (1..=2_000_000u64).map(|k| 1.0 / k as f64).sum();
        let approx = harmonic_number(2_000_000);
        assert!((exact - approx).abs() < 1e-8);
    }

    proptest! {
        #[test]
        fn zero_luck_identity_for_any_base(p in -1000.0f64..1000.0) {
            let adjusted = LuckCurve::new(0.0).adjust(p).unwrap();
            prop_assert_eq!(adjusted, Probability::from_percent(p));
        }

        #[test]
        fn luck_sign_mirrors_range(p in 0.5f64..50.0, luck in 0.01f64..1.0) {
            let n = (100.0 / p).floor();
            let n_int = n as u64;
            let half = n / 2.0;
            let base = (1.0 / n) * (1.0 - luck);

            let up = LuckCurve::new(luck).adjust(p).unwrap().value();
            let down = LuckCurve::new(-luck).adjust(p).unwrap().value();

            let lower = harmonic_sum(half.floor() as u64, n_int - 1) / half * luck + base;
            let upper = harmonic_sum(n_int, 2 * n_int - 1) / half * luck + base;
            prop_assert!((up - lower).abs() < 1e-12);
            prop_assert!((down - upper).abs() < 1e-12);
        }
    }
}
