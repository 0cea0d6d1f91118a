use chrono::{DateTime, Datelike, Timelike, Utc};
use skyview_core::constants::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY_F64,
};
use std::fmt;

/// A Julian Date split into a date part and a day fraction.
///
/// `jd1` holds the Julian Date of the preceding midnight (always ending in .5)
/// and `jd2` the fraction of the day since then. Keeping them apart preserves
/// sub-second resolution that a single `f64` near 2.4 million would lose.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Days elapsed since J2000.0, computed without first summing the halves.
    pub fn days_since_j2000(&self) -> f64 {
        (self.jd1 - J2000_JD) + self.jd2
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    /// Gregorian calendar fields to Julian Date.
    ///
    /// January and February count as months 13 and 14 of the previous year so
    /// that the leap day falls at the end of the computational year. The
    /// century term `B = 2 - A + A/4` switches the Julian calendar over to the
    /// Gregorian one. Integer divisions truncate toward zero.
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        let (y, m) = if month <= 2 {
            (year - 1, month as i32 + 12)
        } else {
            (year, month as i32)
        };

        let a = y / 100;
        let b = 2 - a + a / 4;

        let jd1 = libm::floor(365.25 * (y + 4716) as f64)
            + libm::floor(30.6001 * (m + 1) as f64)
            + day as f64
            + b as f64
            - 1524.5;
        let jd2 = hour as f64 / 24.0 + minute as f64 / MINUTES_PER_DAY + second / SECONDS_PER_DAY_F64;

        Self::new(jd1, jd2)
    }

    /// Julian Date of a UTC timestamp, to whole-second resolution.
    pub fn from_datetime(utc: &DateTime<Utc>) -> Self {
        Self::from_calendar(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second() as f64,
        )
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<&DateTime<Utc>> for JulianDate {
    fn from(utc: &DateTime<Utc>) -> Self {
        Self::from_datetime(utc)
    }
}
