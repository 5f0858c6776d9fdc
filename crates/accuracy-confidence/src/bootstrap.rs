//! Percentile bootstrap over resampled accuracies
//!
//! The interval is read straight off the empirical distribution of the
//! resampled accuracies, so no distributional assumption is made. Quality
//! improves with the number of resamples; a hundred or more is advisable.

use crate::{
    sample::AccuracySample,
    traits::ResampleIntervalEstimator,
    types::{ConfidenceInterval, ConfidenceLevel, IntervalRadius},
};
use accuracy_core::{utils::clamp_unit, Result};
use tracing::{debug, instrument};

/// Percentile bootstrap method
///
/// Uses the `alpha / 2` and `1 - alpha / 2` empirical percentiles of the
/// resampled accuracies as bounds, and their median as the point estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl PercentileBootstrap {
    /// Confidence level represented by `median ± radius`
    ///
    /// Difference of the percentile ranks of the two points, on the [0, 1]
    /// scale.
    #[instrument(skip(self, accuracies, radius), fields(resamples = accuracies.len(), radius = radius.value()))]
    pub fn confidence_level(&self, accuracies: &AccuracySample, radius: IntervalRadius) -> f64 {
        let median = accuracies.median();
        let upper_rank = accuracies.percentile_rank(median + radius.value());
        let lower_rank = accuracies.percentile_rank(median - radius.value());
        debug!(median, lower_rank, upper_rank, "bootstrap percentile ranks");
        clamp_unit((upper_rank - lower_rank) / 100.0)
    }
}

impl ResampleIntervalEstimator for PercentileBootstrap {
    #[instrument(
        skip(self, accuracies, confidence_level),
        fields(resamples = accuracies.len(), confidence_level = confidence_level.value())
    )]
    fn confidence_interval(
        &self,
        accuracies: &AccuracySample,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let tail = confidence_level.tail_probability();
        let lower = accuracies.percentile(100.0 * tail);
        let upper = accuracies.percentile(100.0 * (confidence_level.value() + tail));
        debug!(lower, upper, "bootstrap percentiles");

        Ok(ConfidenceInterval::new(
            lower,
            upper,
            accuracies.median(),
            confidence_level.value(),
        )
        .clamped())
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> AccuracySample {
        AccuracySample::new(&[0.70, 0.77, 0.80, 0.87, 0.90]).unwrap()
    }

    #[test]
    fn test_percentile_interval() {
        let ci = PercentileBootstrap
            .confidence_interval(&sample(), ConfidenceLevel::NINETY)
            .unwrap();
        assert_abs_diff_eq!(ci.lower, 0.714, epsilon = 1e-9);
        assert_abs_diff_eq!(ci.upper, 0.894, epsilon = 1e-9);
        assert_eq!(ci.estimate, 0.80);
        assert!(ci.contains(ci.estimate));
    }

    #[test]
    fn test_unsorted_input_gives_same_interval() {
        let shuffled = AccuracySample::new(&[0.87, 0.70, 0.90, 0.80, 0.77]).unwrap();
        let a = PercentileBootstrap
            .confidence_interval(&shuffled, ConfidenceLevel::NINETY_FIVE)
            .unwrap();
        let b = PercentileBootstrap
            .confidence_interval(&sample(), ConfidenceLevel::NINETY_FIVE)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_resample_collapses() {
        let single = AccuracySample::new(&[0.83]).unwrap();
        let ci = PercentileBootstrap
            .confidence_interval(&single, ConfidenceLevel::NINETY_NINE)
            .unwrap();
        assert_eq!(ci.as_pair(), [0.83, 0.83]);
    }

    #[test]
    fn test_confidence_level() {
        // ranks of 0.70 and 0.90 are 20 and 100
        let level = PercentileBootstrap
            .confidence_level(&sample(), IntervalRadius::new(0.10).unwrap());
        assert_abs_diff_eq!(level, 0.8, epsilon = 1e-9);

        let level = PercentileBootstrap
            .confidence_level(&sample(), IntervalRadius::new(0.5).unwrap());
        assert_abs_diff_eq!(level, 1.0, epsilon = 1e-12);

        // both points are the median itself
        let level = PercentileBootstrap
            .confidence_level(&sample(), IntervalRadius::new(0.0).unwrap());
        assert_eq!(level, 0.0);
    }

    #[test]
    fn test_wider_level_gives_wider_interval() {
        let accuracies: Vec<f64> = (0..200).map(|i| 0.6 + 0.3 * i as f64 / 199.0).collect();
        let sample = AccuracySample::new(&accuracies).unwrap();
        let ci_90 = PercentileBootstrap
            .confidence_interval(&sample, ConfidenceLevel::NINETY)
            .unwrap();
        let ci_99 = PercentileBootstrap
            .confidence_interval(&sample, ConfidenceLevel::NINETY_NINE)
            .unwrap();
        assert!(ci_99.width() > ci_90.width());
    }
}
