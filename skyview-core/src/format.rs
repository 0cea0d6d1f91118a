//! Sexagesimal display strings for right ascension and declination.
//!
//! Both formatters round to whole seconds, which is as much precision as an
//! orientation-sensor fix can honestly claim.
//!
//! | Quantity | Input | Output |
//! |----------|-------|--------|
//! | Right ascension | decimal hours, any value | `HHh MMm SSs` |
//! | Declination | decimal degrees, any value | `±DD° MM' SS"` |
//!
//! # Normalization
//!
//! Right ascension is reduced into [0, 24h) before decomposition, so `-1.5`
//! formats as `22h 30m 00s`. Declination is clamped into [-90°, +90°].
//!
//! # Rounding and Carry
//!
//! Seconds are rounded to the nearest integer. A result of 60 carries into the
//! minutes, and 60 minutes carry into hours or degrees:
//!
//! ```
//! use skyview_core::format::{format_dec, format_ra};
//!
//! // 59.9999...s rounds to 60s, carries to 60m, then to 24h, which wraps to 0h.
//! assert_eq!(format_ra(23.99999999), "00h 00m 00s");
//!
//! // The same carry on declination stops at the pole.
//! assert_eq!(format_dec(89.9999999), "+90° 00' 00\"");
//!
//! assert_eq!(format_ra(18.615556), "18h 36m 56s");
//! assert_eq!(format_dec(-23.4392), "-23° 26' 21\"");
//! ```
//!
//! Non-finite input decomposes to zero in every field.

use crate::angle::{clamp_dec, wrap_hours};

/// Whole units, minutes and seconds of a non-negative value, after rounding
/// and carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sexagesimal {
    whole: u32,
    minutes: u32,
    seconds: u32,
}

impl Sexagesimal {
    fn decompose(value: f64) -> Self {
        let whole = libm::trunc(value);
        let decimal_minutes = (value - whole) * 60.0;
        let minutes = libm::trunc(decimal_minutes);
        let decimal_seconds = (decimal_minutes - minutes) * 60.0;
        let seconds = libm::round(decimal_seconds);

        let mut parts = Self {
            whole: whole as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
        };
        if parts.seconds >= 60 {
            parts.seconds = 0;
            parts.minutes += 1;
        }
        if parts.minutes >= 60 {
            parts.minutes = 0;
            parts.whole += 1;
        }
        parts
    }
}

/// Formats right ascension in hours as `HHh MMm SSs`.
pub fn format_ra(ra_hours: f64) -> String {
    let mut parts = Sexagesimal::decompose(wrap_hours(ra_hours));
    if parts.whole >= 24 {
        parts.whole = 0;
    }
    format!(
        "{:02}h {:02}m {:02}s",
        parts.whole, parts.minutes, parts.seconds
    )
}

/// Formats declination in degrees as `±DD° MM' SS"`.
///
/// The sign is always shown. If rounding carries past 90° the result snaps to
/// exactly `90° 00' 00"`.
pub fn format_dec(dec_degrees: f64) -> String {
    let dec = clamp_dec(dec_degrees);
    let sign = if dec < 0.0 { '-' } else { '+' };
    let mut parts = Sexagesimal::decompose(dec.abs());
    if parts.whole > 90 || (parts.whole == 90 && (parts.minutes > 0 || parts.seconds > 0)) {
        parts = Sexagesimal {
            whole: 90,
            minutes: 0,
            seconds: 0,
        };
    }
    format!(
        "{sign}{:02}° {:02}' {:02}\"",
        parts.whole, parts.minutes, parts.seconds
    )
}
