//! Shared utilities for integration tests

pub use approx::assert_abs_diff_eq;

pub const EPSILON: f64 = 1e-10;

/// Accuracies that sit on or next to the [0, 1] boundary
pub fn boundary_accuracies() -> Vec<f64> {
    vec![0.0, f64::MIN_POSITIVE, 1e-9, 0.5, 1.0 - 1e-9, 1.0]
}

/// Values every validator must reject
pub fn non_finite_values() -> Vec<f64> {
    vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]
}
