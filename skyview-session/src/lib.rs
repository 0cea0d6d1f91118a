//! The sky overlay pipeline, end to end.
//!
//! ```text
//! attitude + GPS fix ──OrientationToSky──► center RA/Dec/Az/Alt
//!                                               │
//!                  ┌────────────────────────────┤
//!                  ▼                            ▼
//!        StarCatalog::stars_in_view     SkyProjector (fov, az rotation)
//!                  │                            │
//!                  └──────────► place ◄─────────┘
//!                                 │
//!                                 ▼
//!                            SkyOverlay
//! ```
//!
//! [`ViewSession`] owns the settings and a shared catalog; each call to
//! [`ViewSession::frame`] builds a fresh projector for that frame. Solar
//! system bodies come from outside and are merged with
//! [`ViewSession::frame_with_bodies`] or [`SkyOverlay::place_bodies`].
//!
//! The crate also ships the `skyview` binary (feature `cli`).

pub mod config;
pub mod error;
pub mod overlay;
pub mod session;

pub use config::ViewConfig;
pub use error::{Error, Result};
pub use overlay::{BodyKind, CenterDetection, PlacedBody, SkyBody, SkyOverlay};
pub use session::ViewSession;
