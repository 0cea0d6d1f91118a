//! Time plumbing for skyview: Julian dates, UTC clocks and mean sidereal time.
//!
//! The sky math needs exactly one time quantity, the local mean sidereal
//! time. This crate gets there from a UTC calendar reading:
//!
//! ```text
//! DateTime<Utc> ──► JulianDate ──► GMST (deg) ──► + longitude ──► LST (deg)
//! ```
//!
//! No leap seconds, UT1-UTC or timezone handling is modelled. Inputs must
//! already be UTC.
//!
//! ```
//! use skyview_time::{gmst_degrees, JulianDate};
//!
//! let jd = JulianDate::from_calendar(2000, 1, 1, 12, 0, 0.0);
//! assert_eq!(jd.to_f64(), 2451545.0);
//! assert!((gmst_degrees(jd) - 280.46061837).abs() < 1e-9);
//! ```

pub mod clock;
pub mod julian;
pub mod sidereal;

pub use clock::{FixedClock, SystemClock, UtcClock};
pub use julian::JulianDate;
pub use sidereal::{
    gmst_degrees, local_sidereal_time, local_sidereal_time_jd, SiderealClock, SiderealTime,
};
