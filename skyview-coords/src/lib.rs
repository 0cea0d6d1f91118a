//! Device orientation to sky coordinates.
//!
//! Given where the phone points (an attitude [`Quaternion`]), where the
//! observer stands (a [`GeodeticPosition`]) and the sidereal time, this crate
//! answers "what patch of sky is that":
//!
//! ```text
//! Quaternion ──► pointing vector ──► (azimuth, altitude)
//!                                          │  latitude
//!                                          ▼
//!                               (hour angle, declination)
//!                                          │  LST from the clock
//!                                          ▼
//!                                 CelestialCoordinates
//! ```
//!
//! Everything is total. A quaternion that has drifted off unit norm gives a
//! less accurate direction, never an error or a NaN.
//!
//! [`Quaternion`]: skyview_core::Quaternion
//! [`GeodeticPosition`]: skyview_core::GeodeticPosition

pub mod celestial;
pub mod horizontal;
pub mod orientation;

pub use celestial::CelestialCoordinates;
pub use horizontal::{
    equatorial_from_horizontal, horizontal_from_quaternion, pointing_vector, HorizontalPosition,
    AZIMUTH_OFFSET_DEG,
};
pub use orientation::OrientationToSky;
