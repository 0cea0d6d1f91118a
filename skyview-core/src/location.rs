//! Observer position as reported by GPS.
//!
//! [`GeodeticPosition`] carries latitude and longitude in degrees and altitude
//! in meters above the ellipsoid. Only latitude and longitude enter the sky
//! math; altitude rides along so a fix can be passed around whole.
//!
//! Longitude is accepted in either the signed [-180, 180] or the
//! [0, 360) convention. Sidereal time wraps the sum anyway, so both give the
//! same sky.

use crate::errors::{require_finite, require_in_range, SkyResult};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticPosition {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Height above the WGS84 ellipsoid in meters.
    pub altitude: f64,
}

impl GeodeticPosition {
    /// Builds a position without validation.
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Builds a position, rejecting non-finite values, latitudes outside
    /// [-90, 90] and longitudes outside [-180, 360).
    pub fn try_new(latitude: f64, longitude: f64, altitude: f64) -> SkyResult<Self> {
        let latitude = require_in_range("latitude", latitude, -90.0, 90.0)?;
        let longitude = require_in_range("longitude", longitude, -180.0, 360.0)?;
        if longitude == 360.0 {
            return Err(crate::SkyError::out_of_range(
                "longitude",
                longitude,
                -180.0,
                360.0,
            ));
        }
        let altitude = require_finite("altitude", altitude)?;
        Ok(Self::new(latitude, longitude, altitude))
    }

    pub const fn greenwich() -> Self {
        Self::new(51.4769, 0.0, 0.0)
    }

    #[inline]
    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkyError;

    #[test]
    fn test_try_new_accepts_both_longitude_conventions() {
        assert!(GeodeticPosition::try_new(45.0, -120.0, 10.0).is_ok());
        assert!(GeodeticPosition::try_new(45.0, 240.0, 10.0).is_ok());
    }

    #[test]
    fn test_try_new_rejects_bad_latitude() {
        let err = GeodeticPosition::try_new(91.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, SkyError::OutOfRange { .. }));
    }

    #[test]
    fn test_try_new_rejects_longitude_360() {
        assert!(GeodeticPosition::try_new(0.0, 360.0, 0.0).is_err());
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert!(GeodeticPosition::try_new(f64::NAN, 0.0, 0.0).is_err());
        assert!(GeodeticPosition::try_new(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_is_unchecked() {
        let p = GeodeticPosition::new(120.0, 500.0, -1.0);
        assert_eq!(p.latitude, 120.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let p = GeodeticPosition::new(19.8283, -155.4783, 4145.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: GeodeticPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
