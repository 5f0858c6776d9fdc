//! Bounds checks for estimator inputs
//!
//! Every check is a pure predicate: it either accepts the value or returns
//! the matching [`Error`] with the offending value embedded. Callers run all
//! checks for a call before doing any numeric work.

use crate::{Error, Result};

/// Largest interval radius that still describes an interval inside [0, 1]
pub const MAX_RADIUS: f64 = 0.5;

/// Check that a sample size is at least `minimum`
pub fn check_sample_size(value: usize, minimum: usize) -> Result<()> {
    if value < minimum.max(1) {
        return Err(Error::InvalidSampleSize {
            value,
            minimum: minimum.max(1),
        });
    }
    Ok(())
}

/// Check that a fold count describes a real cross-validation run (k > 1)
pub fn check_fold_count(value: usize) -> Result<()> {
    if value < 2 {
        return Err(Error::InvalidFoldCount { value });
    }
    Ok(())
}

/// Check that an accuracy lies in [0, 1]
pub fn check_accuracy(value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::accuracy_out_of_range(value));
    }
    Ok(())
}

/// Check that a list of accuracies is non-empty and every element lies in [0, 1]
pub fn check_accuracies(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::empty_accuracies());
    }
    if let Some(&bad) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        return Err(Error::InvalidAccuracy(format!(
            "each accuracy should be between [0, 1], found {bad}"
        )));
    }
    Ok(())
}

/// Check that a confidence level lies strictly inside (0, 1)
pub fn check_confidence_level(level: f64) -> Result<()> {
    if !(level > 0.0 && level < 1.0) {
        return Err(Error::InvalidConfidenceLevel { level });
    }
    Ok(())
}

/// Check that an interval radius lies in [0, 0.5]
pub fn check_radius(radius: f64) -> Result<()> {
    if !(0.0..=MAX_RADIUS).contains(&radius) {
        return Err(Error::InvalidRadius { radius });
    }
    Ok(())
}

/// Check that an interval radius lies in (0, 0.5]
///
/// Sample size planning divides by the radius, so a zero radius is rejected.
pub fn check_positive_radius(radius: f64) -> Result<()> {
    check_radius(radius)?;
    if radius == 0.0 {
        return Err(Error::InvalidRadius { radius });
    }
    Ok(())
}
