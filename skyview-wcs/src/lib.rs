//! Tangent-plane projection between camera pixels and the sky.
//!
//! The pipeline, sky to pixel:
//!
//! ```text
//! (RA, Dec) ──Projection──► plane (deg) ──CD⁻¹──► pixel ──RadialCorrection──► pixel'
//! ```
//!
//! and pixel to sky runs the first two steps backwards, without undoing the
//! correction. [`SkyProjector`] owns one immutable [`ProjectionFrame`]; a new
//! center or field of view means a new projector.
//!
//! ```
//! use skyview_coords::CelestialCoordinates;
//! use skyview_wcs::SkyProjector;
//!
//! let center = CelestialCoordinates::new(5.5, -5.0, 0.0, 35.0);
//! let projector = SkyProjector::new(1080, 1920, &center, 66.0);
//!
//! let px = projector.celestial_to_pixel(5.5, -5.0);
//! assert_eq!((px.x(), px.y()), (540.0, 960.0));
//!
//! // Opposite side of the sky: no image.
//! assert!(!projector.celestial_to_pixel(17.5, 5.0).is_defined());
//! ```

pub mod coordinate;
pub mod distortion;
pub mod error;
pub mod linear;
pub mod projection;
pub mod projector;

pub use coordinate::{IntermediateCoord, PixelCoord, SkyCoord};
pub use distortion::{RadialCorrection, DEFAULT_RADIAL_COEFFICIENT};
pub use error::{WcsError, WcsResult};
pub use linear::LinearTransform;
pub use projection::{Projection, TangentPoint};
pub use projector::{ProjectionFrame, ProjectorOptions, SkyProjector};
