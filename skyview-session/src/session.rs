use crate::config::ViewConfig;
use crate::error::Result;
use crate::overlay::{SkyBody, SkyOverlay};
use skyview_catalog::StarCatalog;
use skyview_coords::{CelestialCoordinates, OrientationToSky};
use skyview_core::{GeodeticPosition, Quaternion};
use skyview_time::{SystemClock, UtcClock};
use skyview_wcs::SkyProjector;
use std::path::Path;
use std::sync::Arc;

/// Everything needed to turn one camera frame into an overlay: the shared
/// catalog, the camera settings and the clock that drives sidereal time.
#[derive(Debug, Clone)]
pub struct ViewSession<C = SystemClock> {
    catalog: Arc<StarCatalog>,
    config: ViewConfig,
    orientation: OrientationToSky<C>,
}

impl ViewSession<SystemClock> {
    pub fn new(catalog: Arc<StarCatalog>, config: ViewConfig) -> Result<Self> {
        Self::with_clock(catalog, config, SystemClock)
    }

    /// Loads the catalog from `path`, failing if it cannot be read.
    pub fn from_catalog_path(path: impl AsRef<Path>, config: ViewConfig) -> Result<Self> {
        let catalog = StarCatalog::open(path)?;
        Self::new(Arc::new(catalog), config)
    }
}

impl<C: UtcClock> ViewSession<C> {
    pub fn with_clock(catalog: Arc<StarCatalog>, config: ViewConfig, clock: C) -> Result<Self> {
        config.validate()?;
        if !catalog.is_loaded() {
            log::warn!("star catalog not loaded, overlays will contain no stars");
        }
        Ok(Self {
            catalog,
            config,
            orientation: OrientationToSky::with_clock(clock),
        })
    }

    pub fn catalog(&self) -> &StarCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Where the device is pointing, right now by the session clock.
    pub fn locate(&self, position: &GeodeticPosition, attitude: &Quaternion) -> CelestialCoordinates {
        self.orientation.compute(position, attitude)
    }

    pub fn projector(&self, center: &CelestialCoordinates, width: u32, height: u32) -> SkyProjector {
        SkyProjector::with_options(
            width,
            height,
            center,
            self.config.fov_degrees,
            self.config.projector_options(),
        )
    }

    /// Catalog stars that land inside the frame centered on `center`.
    pub fn place_stars(&self, center: &CelestialCoordinates, width: u32, height: u32) -> SkyOverlay {
        let mut overlay = SkyOverlay::new(*center, width, height);
        if width == 0 || height == 0 {
            return overlay;
        }

        let projector = self.projector(center, width, height);
        let fov_height = self.config.fov_height_degrees(width, height);
        let candidates = self.catalog.stars_in_view(
            center.ra_hours(),
            center.dec_degrees(),
            self.config.fov_degrees,
            fov_height,
            self.config.max_magnitude,
        );
        log::debug!(
            "{} catalog candidates in {:.1}°x{:.1}° box around {}",
            candidates.len(),
            self.config.fov_degrees,
            fov_height,
            center
        );

        let placed = overlay.place_bodies(&projector, candidates.into_iter().map(SkyBody::from));
        log::debug!("{placed} stars placed on {width}x{height} frame");
        overlay
    }

    /// The full pipeline for one frame: orientation, projection, catalog
    /// query and placement.
    pub fn frame(
        &self,
        position: &GeodeticPosition,
        attitude: &Quaternion,
        width: u32,
        height: u32,
    ) -> SkyOverlay {
        let center = self.locate(position, attitude);
        log::debug!("frame center {center}");
        self.place_stars(&center, width, height)
    }

    /// [`frame`](Self::frame) plus externally supplied bodies such as
    /// planets, the Sun and the Moon.
    pub fn frame_with_bodies<I>(
        &self,
        position: &GeodeticPosition,
        attitude: &Quaternion,
        width: u32,
        height: u32,
        extra: I,
    ) -> SkyOverlay
    where
        I: IntoIterator<Item = SkyBody>,
    {
        let mut overlay = self.frame(position, attitude, width, height);
        if width == 0 || height == 0 {
            return overlay;
        }
        let projector = self.projector(overlay.center(), width, height);
        let placed = overlay.place_bodies(&projector, extra);
        log::debug!("{placed} external bodies placed");
        overlay
    }
}
