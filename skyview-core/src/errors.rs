//! Error types for input validation.
//!
//! The geometry in skyview is total: out-of-range or degenerate inputs produce
//! sentinel values rather than errors. [`SkyError`] only surfaces from the
//! opt-in `try_*` constructors, for callers who want to reject bad sensor data
//! before it reaches the math.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    /// A value was NaN or infinite.
    #[error("{quantity} must be finite, got {value}")]
    NotFinite { quantity: String, value: f64 },

    /// A finite value fell outside its physical range.
    #[error("{quantity} {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        quantity: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A quaternion had (near) zero norm and cannot represent a rotation.
    #[error("Degenerate quaternion: norm {norm}")]
    DegenerateQuaternion { norm: f64 },
}

pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    pub fn not_finite(quantity: impl Into<String>, value: f64) -> Self {
        Self::NotFinite {
            quantity: quantity.into(),
            value,
        }
    }

    pub fn out_of_range(quantity: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            quantity: quantity.into(),
            value,
            min,
            max,
        }
    }

    pub fn degenerate_quaternion(norm: f64) -> Self {
        Self::DegenerateQuaternion { norm }
    }
}

/// Rejects NaN and infinities.
pub fn require_finite(quantity: &str, value: f64) -> SkyResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SkyError::not_finite(quantity, value))
    }
}

/// Rejects non-finite values and values outside the closed range `[min, max]`.
pub fn require_in_range(quantity: &str, value: f64, min: f64, max: f64) -> SkyResult<f64> {
    let value = require_finite(quantity, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(SkyError::out_of_range(quantity, value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_finite_message() {
        let err = SkyError::not_finite("latitude", f64::NAN);
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SkyError::out_of_range("latitude", 91.0, -90.0, 90.0);
        let msg = err.to_string();
        assert!(msg.contains("91"));
        assert!(msg.contains("[-90, 90]"));
    }

    #[test]
    fn test_require_in_range_inclusive() {
        assert_eq!(require_in_range("dec", 90.0, -90.0, 90.0), Ok(90.0));
        assert_eq!(require_in_range("dec", -90.0, -90.0, 90.0), Ok(-90.0));
        assert!(require_in_range("dec", 90.0001, -90.0, 90.0).is_err());
    }

    #[test]
    fn test_require_finite_rejects_infinity() {
        assert!(matches!(
            require_finite("altitude", f64::INFINITY),
            Err(SkyError::NotFinite { .. })
        ));
    }
}
