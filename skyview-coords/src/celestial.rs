use skyview_core::angle::{clamp_dec, hours_to_degrees, wrap_degrees, wrap_hours};
use skyview_core::{format_dec, format_ra};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equatorial and horizontal coordinates of one direction at one instant.
///
/// Values are normalized on construction: RA into [0, 24) hours, azimuth into
/// [0, 360), declination and altitude clamped to [-90, 90]. There are no
/// setters; a new direction means a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CelestialCoordinates {
    ra_hours: f64,
    dec_degrees: f64,
    azimuth_degrees: f64,
    altitude_degrees: f64,
}

impl CelestialCoordinates {
    pub fn new(ra_hours: f64, dec_degrees: f64, azimuth_degrees: f64, altitude_degrees: f64) -> Self {
        Self {
            ra_hours: wrap_hours(ra_hours),
            dec_degrees: clamp_dec(dec_degrees),
            azimuth_degrees: wrap_degrees(azimuth_degrees),
            altitude_degrees: clamp_dec(altitude_degrees),
        }
    }

    /// A purely equatorial point, with the horizontal part zeroed.
    ///
    /// Useful for building a projector around a catalog position. Note that a
    /// zero azimuth means an unrotated frame.
    pub fn equatorial(ra_hours: f64, dec_degrees: f64) -> Self {
        Self::new(ra_hours, dec_degrees, 0.0, 0.0)
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    pub fn ra_degrees(&self) -> f64 {
        hours_to_degrees(self.ra_hours)
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec_degrees
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth_degrees
    }

    pub fn altitude_degrees(&self) -> f64 {
        self.altitude_degrees
    }

    pub fn formatted_ra(&self) -> String {
        format_ra(self.ra_hours)
    }

    pub fn formatted_dec(&self) -> String {
        format_dec(self.dec_degrees)
    }
}

impl fmt::Display for CelestialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {} Dec {} (Az {:.2}°, Alt {:.2}°)",
            self.formatted_ra(),
            self.formatted_dec(),
            self.azimuth_degrees,
            self.altitude_degrees
        )
    }
}
