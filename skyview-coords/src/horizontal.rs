//! Quaternion to horizontal coordinates, and horizontal to equatorial.
//!
//! # Azimuth convention
//!
//! The raw angle `atan2(-v.y, v.x)` is measured in the device/world frame the
//! orientation sensor reports. Reading it as a compass azimuth needs a fixed
//! rotation of -90°, applied before wrapping into [0, 360). The pixel
//! projection downstream takes its frame rotation from this azimuth, so the
//! offset is load-bearing for overlay placement. See [`AZIMUTH_OFFSET_DEG`].
//!
//! # Hour angle and declination
//!
//! With latitude φ, altitude a and azimuth A:
//!
//! ```text
//! sin δ = sin φ sin a + cos φ cos a cos A
//! H     = atan2(-sin A cos a, cos φ sin a - sin φ cos a cos A)
//! ```

use skyview_core::angle::{clamp_dec, degrees_to_hours, wrap_0_2pi, wrap_degrees, wrap_hours};
use skyview_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skyview_core::{Quaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation applied to the raw sensor azimuth, in degrees.
pub const AZIMUTH_OFFSET_DEG: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    /// Compass azimuth in degrees, [0, 360).
    pub azimuth_degrees: f64,
    /// Altitude above the horizon in degrees, [-90, 90].
    pub altitude_degrees: f64,
}

impl HorizontalPosition {
    pub fn new(azimuth_degrees: f64, altitude_degrees: f64) -> Self {
        Self {
            azimuth_degrees: wrap_degrees(azimuth_degrees),
            altitude_degrees: clamp_dec(altitude_degrees),
        }
    }

    /// Hour angle and declination in degrees for an observer at `latitude_deg`.
    ///
    /// The hour angle is in (-180, 180], positive west of the meridian.
    pub fn to_hour_angle_declination(&self, latitude_deg: f64) -> (f64, f64) {
        let (sin_phi, cos_phi) = libm::sincos(latitude_deg * DEG_TO_RAD);
        let (sin_a, cos_a) = libm::sincos(self.altitude_degrees * DEG_TO_RAD);
        let (sin_az, cos_az) = libm::sincos(self.azimuth_degrees * DEG_TO_RAD);

        let sin_dec = (sin_phi * sin_a + cos_phi * cos_a * cos_az).clamp(-1.0, 1.0);
        let dec = libm::asin(sin_dec);
        let ha = libm::atan2(-sin_az * cos_a, cos_phi * sin_a - sin_phi * cos_a * cos_az);

        (ha * RAD_TO_DEG, dec * RAD_TO_DEG)
    }
}

/// Direction of the device's +Z axis in the world frame.
#[inline]
pub fn pointing_vector(q: &Quaternion) -> Vector3 {
    q.pointing_vector()
}

/// Azimuth (with the fixed offset applied) and altitude for an attitude.
pub fn horizontal_from_quaternion(q: &Quaternion) -> HorizontalPosition {
    let v = q.pointing_vector();
    let raw_azimuth = libm::atan2(-v.y, v.x);
    let azimuth = wrap_0_2pi(raw_azimuth + AZIMUTH_OFFSET_DEG * DEG_TO_RAD);
    // Off-unit quaternions can push |v.z| slightly past 1.
    let altitude = -libm::asin(v.z.clamp(-1.0, 1.0));

    HorizontalPosition::new(azimuth * RAD_TO_DEG, altitude * RAD_TO_DEG)
}

/// Right ascension (hours) and declination (degrees) of a horizontal
/// direction, given the observer latitude and local sidereal time in degrees.
pub fn equatorial_from_horizontal(
    horizontal: &HorizontalPosition,
    latitude_deg: f64,
    lst_degrees: f64,
) -> (f64, f64) {
    let (ha_deg, dec_deg) = horizontal.to_hour_angle_declination(latitude_deg);
    let ra_deg = wrap_degrees(lst_degrees - ha_deg);
    (wrap_hours(degrees_to_hours(ra_deg)), dec_deg)
}
