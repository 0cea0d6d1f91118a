use crate::error::{Error, Result};
use skyview_wcs::{Projection, ProjectorOptions, RadialCorrection, DEFAULT_RADIAL_COEFFICIENT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Camera and overlay settings for a [`ViewSession`](crate::ViewSession).
///
/// Defaults match a typical phone main camera: a 66° field, stars to
/// magnitude 4, stereographic projection with the 0.1 radial correction and
/// a center square of 10% of the shorter image side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    pub fov_degrees: f64,
    pub max_magnitude: f64,
    pub projection: Projection,
    /// Only used by the stereographic projection. Zero disables it.
    pub radial_coefficient: f64,
    pub center_square_ratio: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 66.0,
            max_magnitude: 4.0,
            projection: Projection::Stereographic,
            radial_coefficient: DEFAULT_RADIAL_COEFFICIENT,
            center_square_ratio: 0.1,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.fov_degrees.is_finite() || self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 {
            return Err(Error::Config(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if self.max_magnitude.is_nan() {
            return Err(Error::Config("max_magnitude must not be NaN".into()));
        }
        if !self.radial_coefficient.is_finite() {
            return Err(Error::Config(format!(
                "radial_coefficient must be finite, got {}",
                self.radial_coefficient
            )));
        }
        let ratio = self.center_square_ratio;
        if ratio.is_nan() || ratio <= 0.0 || ratio > 1.0 {
            return Err(Error::Config(format!(
                "center_square_ratio must be in (0, 1], got {}",
                self.center_square_ratio
            )));
        }
        Ok(())
    }

    pub fn projector_options(&self) -> ProjectorOptions {
        let radial_correction = match self.projection {
            Projection::Stereographic if self.radial_coefficient != 0.0 => {
                Some(RadialCorrection::new(self.radial_coefficient))
            }
            _ => None,
        };
        ProjectorOptions {
            projection: self.projection,
            radial_correction,
        }
    }

    /// Query box height for an image, keeping the aspect ratio of the frame.
    pub fn fov_height_degrees(&self, width: u32, height: u32) -> f64 {
        self.fov_degrees * height as f64 / width as f64
    }
}
