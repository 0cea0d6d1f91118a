//! Attitude plus position to a full [`CelestialCoordinates`] snapshot.
//!
//! Right ascension needs a sidereal time, and that time is always read from
//! the injected [`UtcClock`] at the moment of the call. The default clock is
//! the system clock, so `compute` answers for "now" and there is no per-call
//! timestamp. Tests and replays swap in a
//! [`FixedClock`](skyview_time::FixedClock).

use crate::celestial::CelestialCoordinates;
use crate::horizontal::{equatorial_from_horizontal, horizontal_from_quaternion};
use skyview_core::{GeodeticPosition, Quaternion};
use skyview_time::{local_sidereal_time, SystemClock, UtcClock};

#[derive(Debug, Clone, Default)]
pub struct OrientationToSky<C = SystemClock> {
    clock: C,
}

impl OrientationToSky<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: UtcClock> OrientationToSky<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Sky coordinates of the device's pointing direction.
    pub fn compute(&self, position: &GeodeticPosition, attitude: &Quaternion) -> CelestialCoordinates {
        let lst = local_sidereal_time(&self.clock.now(), position.longitude);
        Self::compute_with_lst(position, attitude, lst)
    }

    /// Same as [`compute`](Self::compute) for an already known local sidereal
    /// time in degrees.
    pub fn compute_with_lst(
        position: &GeodeticPosition,
        attitude: &Quaternion,
        lst_degrees: f64,
    ) -> CelestialCoordinates {
        let horizontal = horizontal_from_quaternion(attitude);
        let (ra_hours, dec_degrees) =
            equatorial_from_horizontal(&horizontal, position.latitude, lst_degrees);

        CelestialCoordinates::new(
            ra_hours,
            dec_degrees,
            horizontal.azimuth_degrees,
            horizontal.altitude_degrees,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{TimeZone, Utc};
    use skyview_core::constants::PI;
    use skyview_core::Vector3;
    use skyview_time::FixedClock;

    fn j2000_noon() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_zenith_at_j2000() {
        let sky = OrientationToSky::with_clock(j2000_noon());
        let straight_up = Quaternion::from_axis_angle(Vector3::x_axis(), PI);
        let here = GeodeticPosition::new(40.0, 0.0, 120.0);

        let c = sky.compute(&here, &straight_up);

        // LST at Greenwich is 280.46061837 deg.
        assert_abs_diff_eq!(c.ra_hours(), 280.46061837 / 15.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.dec_degrees(), 40.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.altitude_degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_longitude_shifts_ra() {
        let sky = OrientationToSky::with_clock(j2000_noon());
        let straight_up = Quaternion::from_axis_angle(Vector3::x_axis(), PI);

        let a = sky.compute(&GeodeticPosition::new(10.0, 0.0, 0.0), &straight_up);
        let b = sky.compute(&GeodeticPosition::new(10.0, 30.0, 0.0), &straight_up);

        assert_abs_diff_eq!(b.ra_hours() - a.ra_hours(), 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ra_follows_clock_not_caller() {
        let straight_up = Quaternion::from_axis_angle(Vector3::x_axis(), PI);
        let here = GeodeticPosition::new(0.0, 0.0, 0.0);

        let noon = OrientationToSky::with_clock(j2000_noon()).compute(&here, &straight_up);
        let later = OrientationToSky::with_clock(FixedClock::new(
            Utc.with_ymd_and_hms(2000, 1, 1, 18, 0, 0).unwrap(),
        ))
        .compute(&here, &straight_up);

        // Six solar hours is slightly more than six sidereal hours.
        let advance = (later.ra_hours() - noon.ra_hours()).rem_euclid(24.0);
        assert_abs_diff_eq!(advance, 6.0 * 1.00273790935, epsilon = 1e-6);
    }

    #[test]
    fn test_output_ranges() {
        let sky = OrientationToSky::with_clock(j2000_noon());
        let here = GeodeticPosition::new(-33.9, 151.2, 50.0);
        for i in 0..24 {
            let angle = i as f64 * 0.27;
            let q = Quaternion::from_axis_angle(Vector3::new(1.0, 0.5, -0.3), angle);
            let c = sky.compute(&here, &q);
            assert!((0.0..24.0).contains(&c.ra_hours()));
            assert!((-90.0..=90.0).contains(&c.dec_degrees()));
            assert!((0.0..360.0).contains(&c.azimuth_degrees()));
            assert!((-90.0..=90.0).contains(&c.altitude_degrees()));
        }
    }

    #[test]
    fn test_system_clock_default() {
        let sky = OrientationToSky::new();
        let c = sky.compute(&GeodeticPosition::greenwich(), &Quaternion::identity());
        assert!(c.ra_hours().is_finite());
    }
}
