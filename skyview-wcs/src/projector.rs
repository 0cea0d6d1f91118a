//! Pixel ↔ sky mapping for one camera frame.
//!
//! A [`SkyProjector`] is built once per frame from the image size, the
//! [`CelestialCoordinates`] at the image center and a field of view:
//!
//! - reference pixel = image center, `(w/2, h/2)`
//! - scale `s = fov / min(w, h)` degrees per pixel
//! - rotation θ = center azimuth
//! - reference sky point = center RA (as degrees) and Dec
//!
//! # Undefined results
//!
//! Neither direction fails. A target on or behind the far hemisphere, a
//! singular CD matrix (`|det| < 1e-10`, e.g. a zero field of view) or NaN
//! input all yield [`PixelCoord::undefined`] / [`SkyCoord::undefined`].
//!
//! # Round trips
//!
//! The radial correction is applied sky → pixel only. With it enabled,
//! `pixel_to_celestial(celestial_to_pixel(p))` lands slightly farther from
//! the center than `p`, by roughly `k·(r/r_max)²` of the angular distance.
//! Without it both projections round-trip to floating-point precision.

use crate::coordinate::{IntermediateCoord, PixelCoord, SkyCoord};
use crate::distortion::RadialCorrection;
use crate::error::{WcsError, WcsResult};
use crate::linear::{determinant, scale_rotation_cd, LinearTransform};
use crate::projection::{Projection, TangentPoint};
use skyview_coords::CelestialCoordinates;
use skyview_core::angle::{degrees_to_hours, hours_to_degrees, wrap_hours};
use skyview_core::constants::RAD_TO_DEG;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Projection family and optional pixel-space correction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectorOptions {
    pub projection: Projection,
    pub radial_correction: Option<RadialCorrection>,
}

impl ProjectorOptions {
    /// Stereographic with the default radial correction.
    pub fn stereographic() -> Self {
        Self {
            projection: Projection::Stereographic,
            radial_correction: Some(RadialCorrection::default()),
        }
    }

    /// Plain gnomonic, no correction.
    pub fn gnomonic() -> Self {
        Self {
            projection: Projection::Gnomonic,
            radial_correction: None,
        }
    }

    pub fn without_correction(mut self) -> Self {
        self.radial_correction = None;
        self
    }
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self::stereographic()
    }
}

/// Immutable geometry of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionFrame {
    width: u32,
    height: u32,
    crpix: [f64; 2],
    crval: [f64; 2],
    cd: [[f64; 2]; 2],
    fov_degrees: f64,
}

impl ProjectionFrame {
    pub fn new(width: u32, height: u32, center: &CelestialCoordinates, fov_degrees: f64) -> Self {
        let crpix = [width as f64 / 2.0, height as f64 / 2.0];
        let scale = fov_degrees / width.min(height) as f64;
        let rotation = center.azimuth_degrees().to_radians();
        Self {
            width,
            height,
            crpix,
            crval: [hours_to_degrees(center.ra_hours()), center.dec_degrees()],
            cd: scale_rotation_cd(scale, rotation),
            fov_degrees,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn crpix(&self) -> [f64; 2] {
        self.crpix
    }

    /// Reference RA and Dec in degrees.
    pub fn crval(&self) -> [f64; 2] {
        self.crval
    }

    pub fn cd_matrix(&self) -> [[f64; 2]; 2] {
        self.cd
    }

    pub fn determinant(&self) -> f64 {
        determinant(self.cd)
    }

    pub fn fov_degrees(&self) -> f64 {
        self.fov_degrees
    }

    /// Distance at which the radial correction reaches its nominal strength.
    pub fn max_radius(&self) -> f64 {
        self.crpix[0].min(self.crpix[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyProjector {
    frame: ProjectionFrame,
    tangent: TangentPoint,
    linear: Option<LinearTransform>,
    options: ProjectorOptions,
}

impl SkyProjector {
    /// Stereographic projector with the default radial correction.
    pub fn new(width: u32, height: u32, center: &CelestialCoordinates, fov_degrees: f64) -> Self {
        Self::with_options(width, height, center, fov_degrees, ProjectorOptions::default())
    }

    pub fn with_options(
        width: u32,
        height: u32,
        center: &CelestialCoordinates,
        fov_degrees: f64,
        options: ProjectorOptions,
    ) -> Self {
        let frame = ProjectionFrame::new(width, height, center, fov_degrees);
        let [ra0, dec0] = frame.crval;
        Self {
            tangent: TangentPoint::from_degrees(ra0, dec0),
            linear: LinearTransform::from_cd(frame.crpix, frame.cd).ok(),
            frame,
            options,
        }
    }

    /// Like [`with_options`](Self::with_options), but a singular frame is an
    /// error instead of a projector that only answers NaN.
    pub fn try_new(
        width: u32,
        height: u32,
        center: &CelestialCoordinates,
        fov_degrees: f64,
        options: ProjectorOptions,
    ) -> WcsResult<Self> {
        if width == 0 || height == 0 {
            return Err(WcsError::invalid_parameter(format!(
                "image size must be non-zero, got {width}x{height}"
            )));
        }
        if !fov_degrees.is_finite() || fov_degrees <= 0.0 {
            return Err(WcsError::invalid_parameter(format!(
                "field of view must be positive and finite, got {fov_degrees}"
            )));
        }
        let projector = Self::with_options(width, height, center, fov_degrees, options);
        if projector.linear.is_none() {
            return Err(WcsError::non_invertible_matrix(projector.frame.determinant()));
        }
        Ok(projector)
    }

    pub fn frame(&self) -> &ProjectionFrame {
        &self.frame
    }

    pub fn options(&self) -> &ProjectorOptions {
        &self.options
    }

    pub fn projection(&self) -> Projection {
        self.options.projection
    }

    pub fn is_degenerate(&self) -> bool {
        self.linear.is_none()
    }

    /// Pixel position of `(ra_hours, dec_degrees)`, or undefined.
    pub fn celestial_to_pixel(&self, ra_hours: f64, dec_degrees: f64) -> PixelCoord {
        let ra = hours_to_degrees(ra_hours).to_radians();
        let dec = dec_degrees.to_radians();

        let Some(inter) = self.options.projection.project(&self.tangent, ra, dec) else {
            return PixelCoord::undefined();
        };
        let Some(linear) = &self.linear else {
            return PixelCoord::undefined();
        };

        let raw = linear.intermediate_to_pixel(inter);
        match &self.options.radial_correction {
            Some(correction) => {
                let [cx, cy] = self.frame.crpix;
                let (dx, dy) = correction.apply(raw.x() - cx, raw.y() - cy, self.frame.max_radius());
                PixelCoord::new(cx + dx, cy + dy)
            }
            None => raw,
        }
    }

    /// Sky position under pixel `(x, y)`, or undefined.
    pub fn pixel_to_celestial(&self, x: f64, y: f64) -> SkyCoord {
        let Some(linear) = &self.linear else {
            return SkyCoord::undefined();
        };
        if !(x.is_finite() && y.is_finite()) {
            return SkyCoord::undefined();
        }

        let inter: IntermediateCoord = linear.pixel_to_intermediate(PixelCoord::new(x, y));
        let (ra, dec) = self.options.projection.deproject(&self.tangent, inter);

        SkyCoord::new(wrap_hours(degrees_to_hours(ra * RAD_TO_DEG)), dec * RAD_TO_DEG)
    }

    /// Convenience for [`celestial_to_pixel`](Self::celestial_to_pixel) with
    /// a [`SkyCoord`].
    pub fn sky_to_pixel(&self, sky: SkyCoord) -> PixelCoord {
        self.celestial_to_pixel(sky.ra_hours(), sky.dec_degrees())
    }
}
