//! Asymptotic confidence intervals based on theoretical distributions
//!
//! The observed accuracy is treated as the mean of `n` Bernoulli trials whose
//! standard error is bounded by `sqrt(0.25 / n)` (the variance `p(1 - p)`
//! peaks at `p = 0.5`). The radius is that standard error times a two-sided
//! critical value from the normal or Student's t distribution.

use crate::{
    traits::{ConfidenceLevelEstimator, IntervalEstimator, SampleSizeEstimator},
    types::{Accuracy, ConfidenceInterval, ConfidenceLevel, IntervalRadius, SampleSize},
};
use accuracy_core::{
    math::distributions::{normal, students_t},
    utils::clamp_unit,
    validation, Result,
};
use tracing::debug;

/// Largest Bernoulli variance, reached at accuracy 0.5
const MAX_BERNOULLI_VARIANCE: f64 = 0.25;

#[inline]
fn standard_error(sample_size: SampleSize) -> f64 {
    (MAX_BERNOULLI_VARIANCE / sample_size.as_f64()).sqrt()
}

/// Normal (z-test) approximation
///
/// Appropriate once the test set holds more than about 30 examples; it is
/// optimistic for smaller sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalApproximation;

impl NormalApproximation {
    /// Radius of the interval for `n` test examples
    pub fn radius(&self, sample_size: SampleSize, confidence_level: ConfidenceLevel) -> f64 {
        normal::two_sided_critical(confidence_level.value()) * standard_error(sample_size)
    }
}

impl IntervalEstimator for NormalApproximation {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let radius = self.radius(sample_size, confidence_level);
        debug!(n = sample_size.get(), radius, "normal approximation radius");
        Ok(ConfidenceInterval::around(
            accuracy.value(),
            radius,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "Z-test approximation"
    }
}

impl SampleSizeEstimator for NormalApproximation {
    fn sample_size(
        &self,
        radius: IntervalRadius,
        confidence_level: ConfidenceLevel,
    ) -> Result<SampleSize> {
        let z = normal::two_sided_critical(confidence_level.value());
        let required = (z * MAX_BERNOULLI_VARIANCE.sqrt() / radius.value()).powi(2);
        SampleSize::new((required.ceil() as usize).max(1))
    }
}

impl ConfidenceLevelEstimator for NormalApproximation {
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64> {
        let z = radius.value() / standard_error(sample_size);
        Ok(clamp_unit(2.0 * normal::cdf(z) - 1.0))
    }
}

/// Student's t approximation with `n - 1` degrees of freedom
///
/// Wider than the normal approximation for small test sets and converges to
/// it as `n` grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentTApproximation;

impl StudentTApproximation {
    /// Radius of the interval for `n` test examples
    pub fn radius(&self, sample_size: SampleSize, confidence_level: ConfidenceLevel) -> Result<f64> {
        let freedom = Self::degrees_of_freedom(sample_size)?;
        let t = students_t::two_sided_critical(confidence_level.value(), freedom)?;
        Ok(t * standard_error(sample_size))
    }

    fn degrees_of_freedom(sample_size: SampleSize) -> Result<f64> {
        validation::check_sample_size(sample_size.get(), 2)?;
        Ok((sample_size.get() - 1) as f64)
    }
}

impl IntervalEstimator for StudentTApproximation {
    fn confidence_interval(
        &self,
        sample_size: SampleSize,
        accuracy: Accuracy,
        confidence_level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        let radius = self.radius(sample_size, confidence_level)?;
        debug!(n = sample_size.get(), radius, "t approximation radius");
        Ok(ConfidenceInterval::around(
            accuracy.value(),
            radius,
            confidence_level,
        ))
    }

    fn name(&self) -> &'static str {
        "t-test approximation"
    }

    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl ConfidenceLevelEstimator for StudentTApproximation {
    fn confidence_level(&self, sample_size: SampleSize, radius: IntervalRadius) -> Result<f64> {
        let freedom = Self::degrees_of_freedom(sample_size)?;
        let t = radius.value() / standard_error(sample_size);
        Ok(clamp_unit(2.0 * students_t::cdf(t, freedom)? - 1.0))
    }
}
