//! Angle normalization for sky coordinates.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Azimuth, sidereal time, RA in degrees | [0, 360) | [`wrap_degrees`] |
//! | Right ascension in hours | [0, 24) | [`wrap_hours`] |
//! | Device rotation in radians | [0, 2pi) | [`wrap_0_2pi`] |
//! | Declination, altitude, latitude | [-90, 90] | [`clamp_dec`] |
//!
//! # Wrapping vs Clamping
//!
//! Cyclic quantities wrap: 370 degrees of azimuth is the same direction as 10.
//! Declination saturates at the poles instead, since there is nothing past 90.
//!
//! The wrapping functions guard the upper bound explicitly. A Euclidean
//! remainder of a tiny negative input (say `-1e-17`) rounds to the modulus
//! itself, which would put 360.0 or 24.0 into a half-open range.

use crate::constants::{DEGREES_PER_CIRCLE, DEGREES_PER_HOUR, HOURS_PER_DAY, TWOPI};

#[inline]
fn wrap_half_open(x: f64, modulus: f64) -> f64 {
    let w = x.rem_euclid(modulus);
    if w >= modulus {
        0.0
    } else {
        w
    }
}

/// Wraps degrees into [0, 360).
///
/// ```
/// use skyview_core::angle::wrap_degrees;
///
/// assert_eq!(wrap_degrees(370.0), 10.0);
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// assert_eq!(wrap_degrees(-1e-17), 0.0);
/// ```
#[inline]
pub fn wrap_degrees(x: f64) -> f64 {
    wrap_half_open(x, DEGREES_PER_CIRCLE)
}

/// Wraps hours into [0, 24).
#[inline]
pub fn wrap_hours(x: f64) -> f64 {
    wrap_half_open(x, HOURS_PER_DAY)
}

/// Wraps radians into [0, 2pi).
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    wrap_half_open(x, TWOPI)
}

/// Clamps a declination-like angle in degrees to [-90, 90].
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-90.0, 90.0)
}

#[inline]
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

#[inline]
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / DEGREES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(359.5), 359.5);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(720.0 + 45.0), 45.0);
        assert_eq!(wrap_degrees(-45.0), 315.0);
    }

    #[test]
    fn test_wrap_degrees_never_returns_modulus() {
        for x in [-1e-17, -1e-300, -f64::MIN_POSITIVE, -0.0] {
            let w = wrap_degrees(x);
            assert!((0.0..360.0).contains(&w), "wrap_degrees({x}) = {w}");
        }
    }

    #[test]
    fn test_wrap_hours() {
        assert_eq!(wrap_hours(25.0), 1.0);
        assert_eq!(wrap_hours(-1.0), 23.0);
        assert_eq!(wrap_hours(24.0), 0.0);
        let w = wrap_hours(-1e-17);
        assert!((0.0..24.0).contains(&w));
    }

    #[test]
    fn test_wrap_0_2pi() {
        let w = wrap_0_2pi(-crate::constants::HALF_PI);
        assert!((w - 3.0 * crate::constants::HALF_PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI) < 1e-15);
    }

    #[test]
    fn test_clamp_dec() {
        assert_eq!(clamp_dec(95.0), 90.0);
        assert_eq!(clamp_dec(-95.0), -90.0);
        assert_eq!(clamp_dec(12.5), 12.5);
    }

    #[test]
    fn test_hours_degrees_conversion() {
        assert_eq!(hours_to_degrees(6.0), 90.0);
        assert_eq!(degrees_to_hours(180.0), 12.0);
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(wrap_degrees(f64::NAN).is_nan());
        assert!(wrap_hours(f64::NAN).is_nan());
    }
}
