//! Mathematical utilities for accuracy confidence estimation
//!
//! This module provides the distribution functions needed by the interval
//! estimators and their inverses: the standard normal, Student's t and the
//! beta distribution.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function of the standard normal distribution
        pub fn cdf(x: f64) -> f64 {
            0.5 * erfc(-x / SQRT_2)
        }

        /// Inverse cumulative distribution function (quantile function)
        /// of the standard normal distribution
        pub fn ppf(p: f64) -> f64 {
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Two-sided critical value `z` with `P(|Z| <= z) = confidence_level`
        #[inline]
        pub fn two_sided_critical(confidence_level: f64) -> f64 {
            ppf(1.0 - (1.0 - confidence_level) / 2.0)
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_abs_diff_eq;

            #[test]
            fn test_normal_cdf() {
                assert_abs_diff_eq!(cdf(0.0), 0.5, epsilon = 1e-12);
                assert_abs_diff_eq!(cdf(-1.959963984540054), 0.025, epsilon = 1e-9);
                assert_abs_diff_eq!(cdf(1.959963984540054), 0.975, epsilon = 1e-9);
            }

            #[test]
            fn test_normal_ppf() {
                assert_abs_diff_eq!(ppf(0.5), 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(ppf(0.975), 1.959963984540054, epsilon = 1e-9);
                assert_abs_diff_eq!(ppf(0.025), -1.959963984540054, epsilon = 1e-9);
                assert_eq!(ppf(0.0), f64::NEG_INFINITY);
                assert_eq!(ppf(1.0), f64::INFINITY);
            }

            #[test]
            fn test_two_sided_critical() {
                assert_abs_diff_eq!(two_sided_critical(0.90), 1.6448536269514722, epsilon = 1e-9);
                assert_abs_diff_eq!(two_sided_critical(0.99), 2.5758293035489004, epsilon = 1e-9);
            }

            #[test]
            fn test_cdf_ppf_inverse() {
                for &p in &[0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
                    let x = ppf(p);
                    let p_recovered = cdf(x);
                    assert!(
                        (p - p_recovered).abs() < 1e-10,
                        "Failed for p={p}: ppf({p})={x}, cdf({x})={p_recovered}"
                    );
                }
            }
        }
    }

    /// Student's t distribution utilities (location 0, scale 1)
    pub mod students_t {
        use crate::{Error, Result};
        use statrs::distribution::{ContinuousCDF, StudentsT};

        fn standard(freedom: f64) -> Result<StudentsT> {
            StudentsT::new(0.0, 1.0, freedom).map_err(|e| {
                Error::Computation(format!("Failed to create t-distribution: {e}"))
            })
        }

        /// Cumulative distribution function with `freedom` degrees of freedom
        pub fn cdf(x: f64, freedom: f64) -> Result<f64> {
            Ok(standard(freedom)?.cdf(x))
        }

        /// Quantile function with `freedom` degrees of freedom
        pub fn ppf(p: f64, freedom: f64) -> Result<f64> {
            Ok(standard(freedom)?.inverse_cdf(p))
        }

        /// Two-sided critical value `t` with `P(|T| <= t) = confidence_level`
        pub fn two_sided_critical(confidence_level: f64, freedom: f64) -> Result<f64> {
            ppf(1.0 - (1.0 - confidence_level) / 2.0, freedom)
        }

    }

    /// Beta distribution utilities
    pub mod beta {
        use crate::{Error, Result};
        use statrs::function::beta::inv_beta_reg;
        use tracing::trace;

        /// Quantile function of Beta(a, b)
        ///
        /// Inverts the regularized incomplete beta function. `p` of 0 and 1
        /// map to the support ends without calling into the inversion.
        pub fn ppf(p: f64, a: f64, b: f64) -> Result<f64> {
            if !(a > 0.0 && b > 0.0) {
                return Err(Error::Computation(format!(
                    "Beta shape parameters must be positive, got a={a}, b={b}"
                )));
            }
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::Computation(format!(
                    "Beta quantile probability must be in [0, 1], got {p}"
                )));
            }
            if p == 0.0 {
                return Ok(0.0);
            }
            if p == 1.0 {
                return Ok(1.0);
            }

            let x = inv_beta_reg(a, b, p);
            trace!(p, a, b, x, "beta quantile");
            if x.is_nan() {
                return Err(Error::Computation(format!(
                    "Beta quantile did not converge for p={p}, a={a}, b={b}"
                )));
            }
            Ok(x.clamp(0.0, 1.0))
        }

    }
}
