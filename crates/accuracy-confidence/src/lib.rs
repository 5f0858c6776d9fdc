//! Confidence estimation for measured classifier accuracy
//!
//! Given an accuracy observed under one of four evaluation protocols
//! (holdout, k-fold cross-validation, progressive validation or bootstrap
//! resampling), this crate computes an interval expected to contain the true
//! accuracy at a chosen confidence level. Some methods also invert the
//! relationship:
//!
//! - **Sample size**: how many test examples a target interval radius needs
//! - **Confidence level**: what confidence a given radius actually represents
//!
//! # Methods
//!
//! | Name | Estimator | Interval | Sample size | Confidence level |
//! |------|-----------|:--------:|:-----------:|:----------------:|
//! | `holdout_wilson` | [`WilsonScore`] | ✓ | | |
//! | `holdout_clopper_pearson` | [`ClopperPearson`] | ✓ | | |
//! | `holdout_langford` | [`Langford`] | ✓ | ✓ | ✓ |
//! | `holdout_z_test` | [`NormalApproximation`] | ✓ | ✓ | ✓ |
//! | `holdout_t_test` | [`StudentTApproximation`] | ✓ | | ✓ |
//! | `cv` | [`CrossValidation`] | ✓ | ✓ | ✓ |
//! | `progressive` | [`ProgressiveValidation`] | ✓ | ✓ | ✓ |
//! | `bootstrap` | [`PercentileBootstrap`] | ✓ | ✓ | ✓ |
//!
//! All intervals are on the [0, 1] scale and clamped into it.
//!
//! # Examples
//!
//! ## Dispatch by method name
//!
//! ```rust
//! use accuracy_confidence::{estimate_confidence_interval, estimate_confidence_level};
//!
//! let ci = estimate_confidence_interval(Some(321), 0.80, 0.90, "holdout_z_test", None).unwrap();
//! assert!((ci.lower - 0.7541).abs() < 1e-4);
//!
//! let level = estimate_confidence_level(Some(321), ci.radius(), "holdout_z_test", None, None).unwrap();
//! assert!((level - 0.90).abs() < 1e-6);
//! ```
//!
//! ## Estimators directly
//!
//! ```rust
//! use accuracy_confidence::{
//!     Accuracy, ConfidenceLevel, CrossValidation, FoldCount, IntervalEstimator, SampleSize,
//! };
//!
//! let cv = CrossValidation::new(FoldCount::new(7).unwrap());
//! let ci = cv
//!     .confidence_interval(
//!         SampleSize::new(888).unwrap(),
//!         Accuracy::new(0.80).unwrap(),
//!         ConfidenceLevel::new(0.88).unwrap(),
//!     )
//!     .unwrap();
//! println!("{ci}");
//! ```

pub mod api;
mod asymptotic;
mod binomial;
mod bootstrap;
pub mod chart;
pub mod config;
mod hoeffding;
pub mod method;
pub mod registry;
pub mod report;
mod sample;
mod traits;
mod types;

// Re-exports
pub use api::{
    estimate_confidence_interval, estimate_confidence_level, estimate_sample_size,
    DEFAULT_CONFIDENCE_LEVEL, DEFAULT_FOLD_COUNT, DEFAULT_INTERVAL_RADIUS,
};
pub use asymptotic::{NormalApproximation, StudentTApproximation};
pub use binomial::{ClopperPearson, WilsonScore};
pub use bootstrap::PercentileBootstrap;
pub use chart::{IntervalChart, Palette};
pub use config::ReportConfig;
pub use hoeffding::{CrossValidation, Langford, ProgressiveValidation};
pub use method::{Method, Task};
pub use registry::AccuracyInput;
pub use report::{estimate_interval_report, IntervalReport, ReportRow};
pub use sample::AccuracySample;
pub use traits::{
    ConfidenceLevelEstimator, IntervalEstimator, ResampleIntervalEstimator, SampleSizeEstimator,
};
pub use types::{
    Accuracy, ConfidenceInterval, ConfidenceLevel, FoldCount, IntervalRadius, SampleSize,
};

pub use accuracy_core::{Error, Result};
