//! Mean sidereal time from a UTC reading.
//!
//! Greenwich Mean Sidereal Time uses the IAU 1982 expression in days and
//! centuries since J2000.0:
//!
//! ```text
//! d    = JD - 2451545.0
//! T    = d / 36525
//! GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² - T³/38710000   (degrees)
//! LST  = GMST + east longitude
//! ```
//!
//! Both results are reduced into [0, 360). The formula is total for finite
//! input; absurd dates give finite but meaningless angles.

use crate::clock::UtcClock;
use crate::julian::JulianDate;
use chrono::{DateTime, Utc};
use skyview_core::angle::{degrees_to_hours, wrap_degrees};
use skyview_core::constants::DAYS_PER_JULIAN_CENTURY;
use std::fmt;

const GMST_AT_J2000_DEG: f64 = 280.46061837;
const GMST_RATE_DEG_PER_DAY: f64 = 360.98564736629;
const GMST_T2_DEG: f64 = 0.000387933;
const GMST_T3_DIVISOR: f64 = 38_710_000.0;

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
pub fn gmst_degrees(jd: JulianDate) -> f64 {
    let d = jd.days_since_j2000();
    let t = d / DAYS_PER_JULIAN_CENTURY;
    let gmst = GMST_AT_J2000_DEG + GMST_RATE_DEG_PER_DAY * d + GMST_T2_DEG * t * t
        - t * t * t / GMST_T3_DIVISOR;
    wrap_degrees(gmst)
}

/// Local Mean Sidereal Time in degrees for an east longitude in degrees.
pub fn local_sidereal_time_jd(jd: JulianDate, longitude_deg: f64) -> f64 {
    wrap_degrees(gmst_degrees(jd) + longitude_deg)
}

/// Local Mean Sidereal Time in degrees, [0, 360), for a UTC instant.
pub fn local_sidereal_time(utc: &DateTime<Utc>, longitude_deg: f64) -> f64 {
    local_sidereal_time_jd(JulianDate::from_datetime(utc), longitude_deg)
}

/// A sidereal angle in degrees, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiderealTime {
    degrees: f64,
}

impl SiderealTime {
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: wrap_degrees(degrees),
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn hours(&self) -> f64 {
        degrees_to_hours(self.degrees)
    }

    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}h", self.hours())
    }
}

/// Sidereal time at whatever instant a [`UtcClock`] reports.
#[derive(Debug, Clone, Default)]
pub struct SiderealClock<C> {
    clock: C,
}

impl<C: UtcClock> SiderealClock<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn gmst(&self) -> SiderealTime {
        SiderealTime::from_degrees(gmst_degrees(JulianDate::from_datetime(&self.clock.now())))
    }

    /// LST at the clock's current instant for an east longitude in degrees.
    pub fn local_sidereal_time(&self, longitude_deg: f64) -> SiderealTime {
        SiderealTime::from_degrees(local_sidereal_time(&self.clock.now(), longitude_deg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_gmst_at_j2000() {
        skyview_core::assert_ulp_lt!(gmst_degrees(JulianDate::j2000()), 280.46061837, 1);
    }

    #[test]
    fn test_lst_at_greenwich_equals_gmst() {
        let jd = JulianDate::j2000();
        assert_eq!(local_sidereal_time_jd(jd, 0.0), gmst_degrees(jd));
    }

    #[test]
    fn test_meeus_gmst() {
        // Meeus, Astronomical Algorithms, example 12.b
        let jd = JulianDate::from_calendar(1987, 4, 10, 19, 21, 0.0);
        assert_abs_diff_eq!(gmst_degrees(jd), 128.7378734, epsilon = 1e-6);
    }

    #[test]
    fn test_longitude_offset() {
        let jd = JulianDate::from_calendar(2024, 3, 20, 0, 0, 0.0);
        let gmst = gmst_degrees(jd);
        assert_abs_diff_eq!(gmst, 178.01877226866782, epsilon = 1e-6);

        let east = local_sidereal_time_jd(jd, 15.0);
        assert_abs_diff_eq!(east, gmst + 15.0, epsilon = 1e-9);

        let mauna_kea = local_sidereal_time_jd(jd, -155.4783);
        assert_abs_diff_eq!(mauna_kea, 22.540472268667827, epsilon = 1e-6);
    }

    #[test]
    fn test_longitude_conventions_agree() {
        let jd = JulianDate::from_calendar(2015, 8, 1, 22, 10, 5.0);
        let signed = local_sidereal_time_jd(jd, -75.0);
        let positive = local_sidereal_time_jd(jd, 285.0);
        assert_abs_diff_eq!(signed, positive, epsilon = 1e-9);
    }

    #[test]
    fn test_result_in_range() {
        for days in [-40000.0, -1.3, 0.0, 0.25, 123.456, 90000.0] {
            let lst = local_sidereal_time_jd(JulianDate::j2000().add_days(days), -170.0);
            assert!((0.0..360.0).contains(&lst), "lst {lst} out of range");
        }
    }

    #[test]
    fn test_sidereal_day_is_shorter_than_solar_day() {
        let jd = JulianDate::from_calendar(2020, 1, 1, 0, 0, 0.0);
        let a = gmst_degrees(jd);
        let b = gmst_degrees(jd.add_days(1.0));
        // One solar day advances GMST by ~0.9856°.
        assert_abs_diff_eq!(wrap_degrees(b - a), 0.98564736629, epsilon = 1e-6);
    }

    #[test]
    fn test_clock_uses_fixed_instant() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let clock = SiderealClock::new(FixedClock::new(t));
        assert_abs_diff_eq!(clock.gmst().degrees(), 280.46061837, epsilon = 1e-9);
        assert_abs_diff_eq!(
            clock.local_sidereal_time(90.0).degrees(),
            10.46061837,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_sidereal_time_display() {
        let st = SiderealTime::from_degrees(-90.0);
        assert_eq!(st.degrees(), 270.0);
        assert_eq!(st.to_string(), "18.000000h");
    }
}
