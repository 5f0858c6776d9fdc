//! Error types for accuracy confidence estimation
//!
//! Provides a unified error type for the accuracy crates. Every variant is
//! raised at the validation boundary, before any numeric work happens.

use thiserror::Error;

/// Core error type for accuracy confidence operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Sample size below the minimum the estimator accepts
    #[error("Number of samples must be a whole number of at least {minimum}, not {value}")]
    InvalidSampleSize { value: usize, minimum: usize },

    /// Fold count that cannot describe a cross-validation run
    #[error("Number of folds must be a whole number greater than 1, not {value}")]
    InvalidFoldCount { value: usize },

    /// Accuracy outside [0, 1], or an unusable accuracy list
    #[error("Invalid accuracy: {0}")]
    InvalidAccuracy(String),

    /// Confidence level outside the open interval (0, 1)
    #[error("Confidence level should be between (0, 1), not {level}")]
    InvalidConfidenceLevel { level: f64 },

    /// Interval radius outside [0, 0.5]
    #[error("Interval radius should be between [0, 0.5], not {radius}")]
    InvalidRadius { radius: f64 },

    /// Method discriminator not valid for the requested task
    #[error("Unknown {task} estimation method '{method}'. Should be one of: {expected}")]
    UnknownMethod {
        method: String,
        task: &'static str,
        expected: String,
    },

    /// A method needs an argument the caller did not supply
    #[error("Method '{method}' requires the {parameter} parameter")]
    MissingParameter {
        parameter: &'static str,
        method: &'static str,
    },

    /// Report or chart settings that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an accuracy outside [0, 1]
    pub fn accuracy_out_of_range(value: f64) -> Self {
        Self::InvalidAccuracy(format!("accuracy should be between [0, 1], not {value}"))
    }

    /// Create an error for an empty accuracy list
    pub fn empty_accuracies() -> Self {
        Self::InvalidAccuracy("at least one resampled accuracy is required".to_string())
    }

    /// Create an error for a method that does not exist for a task
    pub fn unknown_method(method: &str, task: &'static str, expected: &[&str]) -> Self {
        let expected = expected
            .iter()
            .map(|name| format!("'{name}'"))
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownMethod {
            method: method.to_string(),
            task,
            expected,
        }
    }

    /// Create an error for a missing argument
    pub fn missing(parameter: &'static str, method: &'static str) -> Self {
        Self::MissingParameter { parameter, method }
    }
}
