//! High-level API for accuracy confidence estimation
//!
//! Three entry points take plain arguments and a method discriminator,
//! resolve the method for the requested task, and route the call through
//! the registry. Arguments a method does not use are ignored.
//!
//! # Example
//! ```rust
//! use accuracy_confidence::api::*;
//!
//! let ci = estimate_confidence_interval(Some(555), 0.80, 0.90, "holdout_langford", None).unwrap();
//! assert!(ci.contains(0.80));
//!
//! let n = estimate_sample_size(0.05, 0.90, "holdout_langford", None).unwrap();
//! assert_eq!(n.get(), 600);
//! ```

use crate::{
    method::{Method, Task},
    registry::{self, AccuracyInput, ConfidenceLevelQuery, IntervalQuery, SampleSizeQuery},
    types::{ConfidenceInterval, SampleSize},
};
use accuracy_core::Result;
use tracing::{debug, instrument};

/// Default confidence level of the planner
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Default interval radius of the planner
pub const DEFAULT_INTERVAL_RADIUS: f64 = 0.05;

/// Fold count most cross-validation runs use
pub const DEFAULT_FOLD_COUNT: usize = 10;

/// Estimate the confidence interval of a measured accuracy
///
/// # Arguments
/// * `sample_size` - Number of test examples; unused by `bootstrap`
/// * `accuracy` - A single accuracy, or a slice of resampled accuracies for `bootstrap`
/// * `confidence_level` - Confidence level in (0, 1)
/// * `method` - One of `holdout_wilson`, `holdout_clopper_pearson`,
///   `holdout_langford`, `holdout_z_test`, `holdout_t_test`, `cv`,
///   `progressive`, `bootstrap`
/// * `fold_count` - Number of folds; required by `cv`, ignored otherwise
///
/// The returned bounds always lie in [0, 1].
#[instrument(skip(accuracy), fields(task = "confidence interval"))]
pub fn estimate_confidence_interval<'a>(
    sample_size: Option<usize>,
    accuracy: impl Into<AccuracyInput<'a>>,
    confidence_level: f64,
    method: &str,
    fold_count: Option<usize>,
) -> Result<ConfidenceInterval> {
    let method = Task::ConfidenceInterval.resolve(method)?;
    log_unused(method, sample_size, fold_count);
    let query = IntervalQuery {
        sample_size,
        accuracy: accuracy.into(),
        confidence_level,
        fold_count,
    };
    registry::entry(method).confidence_interval(&query)
}

/// Estimate the number of test examples needed for a target interval radius
///
/// Supported methods: `holdout_langford`, `holdout_z_test`, `cv`,
/// `progressive` (solved as Langford) and `bootstrap` (solved with the
/// normal approximation). The radius must be in (0, 0.5].
#[instrument(fields(task = "sample size"))]
pub fn estimate_sample_size(
    interval_radius: f64,
    confidence_level: f64,
    method: &str,
    fold_count: Option<usize>,
) -> Result<SampleSize> {
    let method = Task::SampleSize.resolve(method)?;
    log_unused(method, None, fold_count);
    let query = SampleSizeQuery {
        interval_radius,
        confidence_level,
        fold_count,
    };
    registry::entry(method).sample_size(&query)
}

/// Estimate the confidence level an interval radius represents
///
/// Supported methods: `holdout_langford`, `holdout_z_test`,
/// `holdout_t_test`, `cv`, `progressive`, `bootstrap`. The bootstrap solver
/// reads `accuracies` instead of `sample_size`. The result is clamped into
/// [0, 1].
#[instrument(skip(accuracies), fields(task = "confidence level", resamples = accuracies.map(<[f64]>::len)))]
pub fn estimate_confidence_level(
    sample_size: Option<usize>,
    interval_radius: f64,
    method: &str,
    fold_count: Option<usize>,
    accuracies: Option<&[f64]>,
) -> Result<f64> {
    let method = Task::ConfidenceLevel.resolve(method)?;
    log_unused(method, sample_size, fold_count);
    if accuracies.is_some() && !method.uses_resamples() {
        debug!(%method, "ignoring resampled accuracies");
    }
    let query = ConfidenceLevelQuery {
        sample_size,
        interval_radius,
        fold_count,
        accuracies,
    };
    registry::entry(method).confidence_level(&query)
}

fn log_unused(method: Method, sample_size: Option<usize>, fold_count: Option<usize>) {
    if fold_count.is_some() && !method.uses_folds() {
        debug!(%method, fold_count, "ignoring fold count");
    }
    if sample_size.is_some() && method.uses_resamples() {
        debug!(%method, sample_size, "ignoring sample size");
    }
    debug!(%method, label = method.label(), "dispatching");
}
