//! Shared fixtures for the accuracy-confidence integration tests

#![allow(dead_code)]

pub use approx::assert_abs_diff_eq;

/// Tolerance of the published scenarios
///
/// Their expected bounds are rounded to four decimals, so half a unit in the
/// last place is the tightest bound they can be held to.
pub const SCENARIO_EPSILON: f64 = 5e-5;

pub const EPSILON: f64 = 1e-10;

/// Methods that take a scalar accuracy and a sample size
pub const POINT_METHODS: [&str; 7] = [
    "holdout_wilson",
    "holdout_clopper_pearson",
    "holdout_langford",
    "holdout_z_test",
    "holdout_t_test",
    "cv",
    "progressive",
];

/// Methods with a closed-form radius whose sample size can be solved for
pub const INVERTIBLE_METHODS: [&str; 3] = ["holdout_langford", "holdout_z_test", "cv"];

/// Fold count handed to `cv` by the generic tests
pub const FOLDS: usize = 5;

pub fn folds_for(method: &str) -> Option<usize> {
    (method == "cv").then_some(FOLDS)
}

/// The five bootstrap accuracies of the reference scenario
pub fn reference_resamples() -> Vec<f64> {
    vec![0.70, 0.77, 0.80, 0.87, 0.90]
}
