//! Confidence planning for classifier accuracy
//!
//! This crate re-exports the workspace crates:
//!
//! - [`accuracy_core`]: errors, validation and the distribution functions
//! - [`accuracy_confidence`]: interval estimators, reverse solvers, dispatch
//!   by method name, and multi-level reports
//!
//! # Example
//!
//! ```rust
//! use confidence_planner::prelude::*;
//!
//! let ci = estimate_confidence_interval(Some(555), 0.80, 0.90, "holdout_clopper_pearson", None).unwrap();
//! assert!(ci.contains(0.80));
//!
//! let needed = estimate_sample_size(0.02, 0.95, "holdout_z_test", None).unwrap();
//! assert_eq!(needed.get(), 2401);
//! ```

pub use accuracy_confidence;
pub use accuracy_core;

pub use accuracy_confidence::{
    estimate_confidence_interval, estimate_confidence_level, estimate_interval_report,
    estimate_sample_size, ConfidenceInterval, Method, Task,
};
pub use accuracy_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use accuracy_confidence::{
        estimate_confidence_interval, estimate_confidence_level, estimate_interval_report,
        estimate_sample_size, Accuracy, AccuracySample, ConfidenceInterval, ConfidenceLevel,
        IntervalChart, IntervalEstimator, IntervalRadius, IntervalReport, Method, Palette,
        ReportConfig, SampleSize, Task,
    };
    pub use accuracy_core::{Error, Result};
}
