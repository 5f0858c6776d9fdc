//! Core traits for accuracy confidence estimation
//!
//! Forward estimators map an observed accuracy to an interval. Reverse
//! estimators invert the same relationship: given a target radius they
//! solve for the sample size, or given a sample size they solve for the
//! confidence level that radius represents. Inputs arrive already validated
//! through the newtypes in [`crate::types`].

use crate::{
    sample::AccuracySample,
    types::{Accuracy, ConfidenceInterval, ConfidenceLevel, IntervalRadius, SampleSize},
};
use accuracy_core::Result;

/// Interval estimator for a single accuracy measured on `n` examples
pub trait IntervalEstimator {
    /// Calculate the confidence interval around the observed accuracy
    ///
    /// The returned bounds are always clamped into [0, 1].
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Estimator name for documentation
    fn name(&self) -> &'static str;

    /// Smallest sample size the estimator accepts
    fn minimum_sample_size(&self) -> usize {
        1
    }
}

/// Interval estimator driven by the empirical distribution of resampled accuracies
pub trait ResampleIntervalEstimator {
    /// Calculate the confidence interval from the resampled accuracies
    fn confidence_interval(
        &self,
        accuracies: &AccuracySample,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Estimator name for documentation
    fn name(&self) -> &'static str;
}

/// Solves for the number of samples needed to reach a target interval radius
pub trait SampleSizeEstimator {
    /// Required sample size, rounded up
    fn sample_size(
        &self,
        radius: IntervalRadius,
        confidence_level: ConfidenceLevel,
    ) -> Result<SampleSize>;
}

/// Solves for the confidence level an interval radius represents
pub trait ConfidenceLevelEstimator {
    /// Achieved confidence level, clamped into [0, 1]
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64>;
}
