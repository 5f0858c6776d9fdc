//! Distribution-free intervals based on Hoeffding's inequality
//!
//! All three estimators share one radius:
//!
//! ```text
//! radius = sqrt( ln(2 / (1 - confidence)) * k / (2 n) )
//! ```
//!
//! - **Langford** (holdout "loose" bound): `k = 1`, `n` is the test set size
//! - **Cross-validation** (Blum et al.): `k` is the fold count and `n` the full
//!   dataset size, so k-fold validation is no tighter than a `1/k` holdout
//! - **Progressive validation**: `k = 1`, `n` is the length of the test stream
//!
//! Each radius has closed-form inverses for the sample size and the
//! confidence level.

use crate::{
    traits::{ConfidenceLevelEstimator, IntervalEstimator, SampleSizeEstimator},
    types::{
        Accuracy, ConfidenceInterval, ConfidenceLevel, FoldCount, IntervalRadius, SampleSize,
    },
};
use accuracy_core::{utils::clamp_unit, Result};
use tracing::debug;

/// `ln(2 / alpha)`, the log term every Hoeffding bound shares
#[inline]
fn log_term(confidence_level: ConfidenceLevel) -> f64 {
    (2.0 / confidence_level.alpha()).ln()
}

fn hoeffding_radius(n: f64, confidence_level: ConfidenceLevel, folds: f64) -> f64 {
    (log_term(confidence_level) * folds / (2.0 * n)).sqrt()
}

fn hoeffding_sample_size(
    radius: IntervalRadius,
    confidence_level: ConfidenceLevel,
    folds: f64,
) -> Result<SampleSize> {
    let r = radius.value();
    let required = log_term(confidence_level) * folds / (2.0 * r * r);
    // Round up: a fractional requirement is never satisfied by fewer samples
    SampleSize::new((required.ceil() as usize).max(1))
}

fn hoeffding_confidence(n: f64, radius: IntervalRadius, folds: f64) -> f64 {
    let r = radius.value();
    clamp_unit(1.0 - 2.0 * (-2.0 * n * r * r / folds).exp())
}

/// Langford's holdout bound
///
/// The most conservative of the holdout estimators; valid for any
/// distribution of errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Langford;

impl Langford {
    /// Radius of the interval for `n` test examples
    pub fn radius(&self, sample_size: SampleSize, confidence_level: ConfidenceLevel) -> f64 {
        hoeffding_radius(sample_size.as_f64(), confidence_level, 1.0)
    }
}

impl IntervalEstimator for Langford {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let radius = self.radius(sample_size, confidence_level);
        debug!(n = sample_size.get(), radius, "Langford radius");
        Ok(ConfidenceInterval::around(
            accuracy.value(),
            radius,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Langford"
    }
}

impl SampleSizeEstimator for Langford {
    fn sample_size(
        &self,
        radius: IntervalRadius,
        confidence_level: ConfidenceLevel,
    ) -> Result<SampleSize> {
        hoeffding_sample_size(radius, confidence_level, 1.0)
    }
}

impl ConfidenceLevelEstimator for Langford {
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64> {
        Ok(hoeffding_confidence(sample_size.as_f64(), radius, 1.0))
    }
}

/// k-fold cross-validation bound
#[derive(Debug, Clone, Copy)]
pub struct CrossValidation {
    folds: FoldCount,
}

impl CrossValidation {
    pub fn new(folds: FoldCount) -> Self {
        Self { folds }
    }

    pub fn folds(&self) -> FoldCount {
        self.folds
    }

    /// Radius of the interval for `n` examples spread over the folds
    pub fn radius(&self, sample_size: SampleSize, confidence_level: ConfidenceLevel) -> f64 {
        hoeffding_radius(sample_size.as_f64(), confidence_level, self.folds.as_f64())
    }
}

impl IntervalEstimator for CrossValidation {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let radius = self.radius(sample_size, confidence_level);
        debug!(
            n = sample_size.get(),
            folds = self.folds.get(),
            radius,
            "cross-validation radius"
        );
        Ok(ConfidenceInterval::around(
            accuracy.value(),
            radius,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Cross-validation"
    }
}

impl SampleSizeEstimator for CrossValidation {
    fn sample_size(
        &self,
        radius: IntervalRadius,
        confidence_level: ConfidenceLevel,
    ) -> Result<SampleSize> {
        hoeffding_sample_size(radius, confidence_level, self.folds.as_f64())
    }
}

impl ConfidenceLevelEstimator for CrossValidation {
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64> {
        Ok(hoeffding_confidence(
            sample_size.as_f64(),
            radius,
            self.folds.as_f64(),
        ))
    }
}

/// Progressive validation bound
///
/// Each example is scored before the model trains on it, so the whole stream
/// acts as a single holdout set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressiveValidation;

impl ProgressiveValidation {
    /// Radius of the interval for a test stream of `n` examples
    pub fn radius(&self, sample_size: SampleSize, confidence_level: ConfidenceLevel) -> f64 {
        hoeffding_radius(sample_size.as_f64(), confidence_level, 1.0)
    }
}

impl IntervalEstimator for ProgressiveValidation {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let radius = self.radius(sample_size, confidence_level);
        debug!(n = sample_size.get(), radius, "progressive validation radius");
        Ok(ConfidenceInterval::around(
            accuracy.value(),
            radius,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Progressive validation"
    }
}

impl ConfidenceLevelEstimator for ProgressiveValidation {
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64> {
        Ok(hoeffding_confidence(sample_size.as_f64(), radius, 1.0))
    }
}
