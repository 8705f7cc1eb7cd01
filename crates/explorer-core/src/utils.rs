//! Numeric helpers shared across the explorer crates

use crate::{Error, Result};

/// Allowed deviation of the mixture weight sum from 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Compare two floats with an absolute tolerance
///
/// # Examples
///
/// ```rust
/// use explorer_core::utils::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// ```
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Reject a named scalar that is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use explorer_core::utils::ensure_finite;
///
/// assert!(ensure_finite("v_min", -5.0).is_ok());
/// assert!(ensure_finite("v_max", f64::NAN).is_err());
/// ```
pub fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_parameters(format!(
            "{name} must be finite, got {value}"
        )))
    }
}
