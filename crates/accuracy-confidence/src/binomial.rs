//! Binomial proportion intervals
//!
//! Both estimators model the `n` test predictions as Bernoulli trials with
//! `accuracy * n` successes. Unlike the symmetric bounds, their intervals
//! lean away from 0 and 1.

use crate::{
    traits::IntervalEstimator,
    types::{Accuracy, ConfidenceInterval, ConfidenceLevel, SampleSize},
};
use accuracy_core::{
    math::distributions::{beta, normal},
    Result,
};
use tracing::debug;

/// Wilson score interval
///
/// Good coverage on small test sets and for accuracies near the boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct WilsonScore;

impl IntervalEstimator for WilsonScore {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let n = sample_size.as_f64();
        let p = accuracy.value();
        let z = normal::two_sided_critical(confidence_level.value());
        let z2 = z * z;

        let denominator = 1.0 + z2 / n;
        let center = p + z2 / (2.0 * n);
        let spread = z * (p * (1.0 - p) / n + z2 / (4.0 * n * n)).sqrt();
        debug!(n = sample_size.get(), z, spread, "Wilson score");

        Ok(ConfidenceInterval::new(
            (center - spread) / denominator,
            (center + spread) / denominator,
            p,
            confidence_level.value(),
        )
        .clamped())
    }

    fn name(&self) -> &'static str {
        "Wilson score"
    }
}

/// Clopper-Pearson exact interval
///
/// Inverts the binomial test through beta quantiles. Conservative: its
/// coverage never drops below the requested level.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClopperPearson;

impl IntervalEstimator for ClopperPearson {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let n = sample_size.as_f64();
        let successes = accuracy.value() * n;
        let tail = confidence_level.tail_probability();

        // Degenerate tails: no successes pins the lower bound, no failures the upper
        let lower = if successes <= 0.0 {
            0.0
        } else {
            beta::ppf(tail, successes, n - successes + 1.0)?
        };
        let upper = if successes >= n {
            1.0
        } else {
            beta::ppf(1.0 - tail, successes + 1.0, n - successes)?
        };
        debug!(n = sample_size.get(), successes, lower, upper, "Clopper-Pearson");

        Ok(ConfidenceInterval::new(lower, upper, accuracy.value(), confidence_level.value()).clamped())
    }

    fn name(&self) -> &'static str {
        "Clopper-Pearson"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn level(value: f64) -> ConfidenceLevel {
        ConfidenceLevel::new(value).unwrap()
    }

    fn n(value: usize) -> SampleSize {
        SampleSize::new(value).unwrap()
    }

    fn acc(value: f64) -> Accuracy {
        Accuracy::new(value).unwrap()
    }

    #[test]
    fn test_wilson_interval() {
        let ci = WilsonScore
            .confidence_interval(n(132), acc(0.80), level(0.80))
            .unwrap();
        assert_abs_diff_eq!(ci.lower, 0.7518, epsilon = 5e-5);
        assert_abs_diff_eq!(ci.upper, 0.8408, epsilon = 5e-5);
        assert_eq!(ci.estimate, 0.80);
    }

    #[test]
    fn test_wilson_stays_inside_unit_interval() {
        let ci = WilsonScore
            .confidence_interval(n(20), acc(1.0), level(0.95))
            .unwrap();
        assert!(ci.lower > 0.8 && ci.lower < 1.0);
        assert_abs_diff_eq!(ci.upper, 1.0, epsilon = 1e-12);

        let ci = WilsonScore
            .confidence_interval(n(20), acc(0.0), level(0.95))
            .unwrap();
        assert_abs_diff_eq!(ci.lower, 0.0, epsilon = 1e-12);
        assert!(ci.upper > 0.0 && ci.upper < 0.2);
    }

    #[test]
    fn test_clopper_pearson_interval() {
        let ci = ClopperPearson
            .confidence_interval(n(555), acc(0.80), level(0.90))
            .unwrap();
        assert_abs_diff_eq!(ci.lower, 0.7700, epsilon = 5e-5);
        assert_abs_diff_eq!(ci.upper, 0.8276, epsilon = 5e-5);
    }

    #[test]
    fn test_clopper_pearson_boundaries() {
        let ci = ClopperPearson
            .confidence_interval(n(50), acc(0.0), level(0.95))
            .unwrap();
        assert_eq!(ci.lower, 0.0);
        // 1 - 0.025^(1/50)
        assert_abs_diff_eq!(ci.upper, 1.0 - 0.025_f64.powf(1.0 / 50.0), epsilon = 1e-9);

        let ci = ClopperPearson
            .confidence_interval(n(50), acc(1.0), level(0.95))
            .unwrap();
        assert_eq!(ci.upper, 1.0);
        assert_abs_diff_eq!(ci.lower, 0.025_f64.powf(1.0 / 50.0), epsilon = 1e-9);
    }

    #[test]
    fn test_clopper_pearson_wider_than_wilson() {
        let wilson = WilsonScore
            .confidence_interval(n(100), acc(0.7), level(0.95))
            .unwrap();
        let exact = ClopperPearson
            .confidence_interval(n(100), acc(0.7), level(0.95))
            .unwrap();
        assert!(exact.width() > wilson.width());
        assert!(exact.contains(0.7));
        assert!(wilson.contains(0.7));
    }
}
