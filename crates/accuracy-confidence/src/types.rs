//! Common types for accuracy confidence estimation
//!
//! Each scalar input has a validated newtype. Constructing one runs the
//! matching bounds check from `accuracy_core::validation`, so a value of
//! these types is always in range.

use accuracy_core::{utils::clamp_unit_pair, validation, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence interval around an observed accuracy
///
/// Intervals produced by the estimators are always clamped into [0, 1], which
/// makes them asymmetric when the accuracy sits close to 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (observed accuracy, or bootstrap median)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// Symmetric interval `estimate ± radius`, clamped into [0, 1]
    pub fn around(estimate: f64, radius: f64, confidence_level: ConfidenceLevel) -> Self {
        Self::new(
            estimate - radius,
            estimate + radius,
            estimate,
            confidence_level.value(),
        )
        .clamped()
    }

    /// Copy of this interval with both bounds forced into [0, 1]
    #[must_use]
    pub fn clamped(self) -> Self {
        let (lower, upper) = clamp_unit_pair(self.lower, self.upper);
        Self {
            lower,
            upper,
            ..self
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Half-width of the interval
    pub fn radius(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Bounds as an ordered pair `[lower, upper]`
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level * 100.0,
            self.lower,
            self.upper,
            self.estimate
        )
    }
}

/// Confidence level type with validation, always inside (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    pub fn new(level: f64) -> Result<Self> {
        validation::check_confidence_level(level)?;
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_EIGHT: Self = Self(0.98);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// Number of test examples behind a measured accuracy, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleSize(usize);

impl SampleSize {
    /// Create a sample size of at least one example
    pub fn new(size: usize) -> Result<Self> {
        Self::at_least(size, 1)
    }

    /// Create a sample size of at least `minimum` examples
    pub fn at_least(size: usize, minimum: usize) -> Result<Self> {
        validation::check_sample_size(size, minimum)?;
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of cross-validation folds, always greater than one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FoldCount(usize);

impl FoldCount {
    pub fn new(folds: usize) -> Result<Self> {
        validation::check_fold_count(folds)?;
        Ok(Self(folds))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Fraction of correct predictions, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Accuracy(f64);

impl Accuracy {
    pub fn new(accuracy: f64) -> Result<Self> {
        validation::check_accuracy(accuracy)?;
        Ok(Self(accuracy))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Half-width of a confidence interval, in [0, 0.5]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct IntervalRadius(f64);

impl IntervalRadius {
    pub fn new(radius: f64) -> Result<Self> {
        validation::check_radius(radius)?;
        Ok(Self(radius))
    }

    /// Create a radius that must also be strictly positive
    pub fn positive(radius: f64) -> Result<Self> {
        validation::check_positive_radius(radius)?;
        Ok(Self(radius))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
