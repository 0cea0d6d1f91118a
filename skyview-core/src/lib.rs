//! Shared building blocks for the skyview crates.
//!
//! `skyview-core` holds the small amount of math every other crate leans on:
//! angle wrapping and clamping, the device attitude quaternion, the observer's
//! geodetic position, and the sexagesimal formatters used for display.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Wrap/clamp helpers for degrees and hours, unit conversion |
//! | [`format`] | `HHh MMm SSs` / `±DD° MM' SS"` formatting with carry propagation |
//! | [`quaternion`] | Device attitude [`Quaternion`] and its pointing vector |
//! | [`vector3`] | Minimal 3-D [`Vector3`] |
//! | [`location`] | Observer [`GeodeticPosition`] |
//! | [`constants`] | Unit conversions and epoch constants |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//!
//! # Design Notes
//!
//! - **Degrees at the boundaries, radians inside**: public values are degrees
//!   (and hours for right ascension) because that is what sensors and catalogs
//!   deliver. Functions convert to radians only for trigonometry.
//!
//! - **Total functions**: nothing in this crate panics on odd input. Validation
//!   is opt-in through the `try_*` constructors.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod format;
pub mod location;
pub mod math;
pub mod quaternion;
pub mod vector3;

pub use errors::{SkyError, SkyResult};
pub use format::{format_dec, format_ra};
pub use location::GeodeticPosition;
pub use quaternion::Quaternion;
pub use vector3::Vector3;

pub mod test_helpers;
