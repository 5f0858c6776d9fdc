//! Core types and numeric primitives for accuracy confidence estimation
//!
//! This crate provides the foundation shared by the interval estimators:
//!
//! - **Errors**: one error type covering every validation failure
//! - **Validation**: pure bounds checks for sample sizes, fold counts,
//!   accuracies, confidence levels and interval radii
//! - **Math**: normal, Student's t and beta distribution functions
//! - **Utilities**: clamping into [0, 1], sorting, empirical percentiles
//!
//! # Example
//!
//! ```rust
//! use accuracy_core::{math::distributions::normal, utils::clamp_unit_pair, validation};
//!
//! validation::check_confidence_level(0.95).unwrap();
//! let z = normal::two_sided_critical(0.95);
//! let radius = z * (0.25_f64 / 100.0).sqrt();
//! let (lower, upper) = clamp_unit_pair(0.97 - radius, 0.97 + radius);
//! assert_eq!(upper, 1.0);
//! assert!(lower < 0.97);
//! ```

pub mod error;
pub mod math;
pub mod utils;
pub mod validation;

// Re-export core types
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
