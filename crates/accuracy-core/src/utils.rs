//! Utility functions for working with accuracy values and samples

use std::cmp::Ordering;

fn nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater, // NaN goes after non-NaN
        (false, true) => Ordering::Less,    // non-NaN goes before NaN
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end. Input that is already in
/// ascending order is copied without sorting.
///
/// # Examples
///
/// ```rust
/// use accuracy_core::utils::sorted;
///
/// let data = vec![0.9, 0.7, 0.8];
/// assert_eq!(sorted(&data), vec![0.7, 0.8, 0.9]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    if !is_sorted(&sorted) {
        sorted.sort_by(nan_last);
    }
    sorted
}

/// Whether the slice is in ascending order
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| nan_last(&w[0], &w[1]) != Ordering::Greater)
}

/// Force a value into [0, 1]
///
/// ```rust
/// use accuracy_core::utils::clamp_unit;
///
/// assert_eq!(clamp_unit(-0.2), 0.0);
/// assert_eq!(clamp_unit(0.4), 0.4);
/// assert_eq!(clamp_unit(1.3), 1.0);
/// ```
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Force both ends of a pair into [0, 1]
///
/// Returns a new pair with the smaller end first, so reversed ends come
/// back ordered.
#[inline]
pub fn clamp_unit_pair(lower: f64, upper: f64) -> (f64, f64) {
    let (lower, upper) = if upper < lower { (upper, lower) } else { (lower, upper) };
    (clamp_unit(lower), clamp_unit(upper))
}

/// Empirical percentile of sorted data with linear interpolation
///
/// `q` is on the percentage scale [0, 100]. The value sits at position
/// `q / 100 * (n - 1)` and is interpolated between its closest ranks.
/// Returns NaN for empty input.
///
/// ```rust
/// use accuracy_core::utils::percentile_sorted;
///
/// let data = [0.70, 0.77, 0.80, 0.87, 0.90];
/// assert!((percentile_sorted(&data, 5.0) - 0.714).abs() < 1e-12);
/// ```
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let q = q.clamp(0.0, 100.0);
    let position = q / 100.0 * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;
    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

/// Percentile rank of `score` within sorted data, on the [0, 100] scale
///
/// Uses the "rank" convention: values equal to the score contribute half
/// their weight, and a score present in the data gets an extra half step.
/// Returns NaN for empty input.
pub fn percentile_rank_sorted(sorted: &[f64], score: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let left = sorted.partition_point(|&x| x < score);
    let right = sorted.partition_point(|&x| x <= score);
    let plus_one = usize::from(left < right);
    (left + right + plus_one) as f64 * 50.0 / sorted.len() as f64
}

/// Median of sorted data
///
/// Even-sized data yields the mean of the two middle values. Returns NaN for
/// empty input.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => f64::NAN,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => 0.5 * (sorted[n / 2 - 1] + sorted[n / 2]),
    }
}
