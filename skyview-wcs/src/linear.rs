//! The CD matrix: plane degrees ↔ pixel offsets.
//!
//! ```text
//! [x]   [cd11 cd12] [px - crpix1]
//! [y] = [cd21 cd22] [py - crpix2]
//! ```
//!
//! The sky projector builds its matrix as a scaled rotation, with the scale in
//! degrees per pixel and the rotation equal to the frame azimuth θ:
//!
//! ```text
//! cd11 = -s·cosθ   cd12 =  s·sinθ
//! cd21 = -s·sinθ   cd22 = -s·cosθ
//! ```

use crate::coordinate::{IntermediateCoord, PixelCoord};
use crate::error::{WcsError, WcsResult};

/// Below this |det| the frame is treated as singular.
pub const DETERMINANT_THRESHOLD: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform {
    crpix: [f64; 2],
    cd: [[f64; 2]; 2],
    cd_inverse: [[f64; 2]; 2],
    determinant: f64,
}

impl LinearTransform {
    pub fn from_cd(crpix: [f64; 2], cd: [[f64; 2]; 2]) -> WcsResult<Self> {
        let determinant = determinant(cd);
        if !determinant.is_finite() || determinant.abs() < DETERMINANT_THRESHOLD {
            return Err(WcsError::non_invertible_matrix(determinant));
        }
        let cd_inverse = compute_inverse(cd, determinant);
        Ok(Self {
            crpix,
            cd,
            cd_inverse,
            determinant,
        })
    }

    /// Scaled rotation by `rotation_rad` with `scale` degrees per pixel.
    pub fn from_scale_rotation(crpix: [f64; 2], scale: f64, rotation_rad: f64) -> WcsResult<Self> {
        Self::from_cd(crpix, scale_rotation_cd(scale, rotation_rad))
    }

    pub fn pixel_to_intermediate(&self, pixel: PixelCoord) -> IntermediateCoord {
        let d0 = pixel.x() - self.crpix[0];
        let d1 = pixel.y() - self.crpix[1];
        let x = self.cd[0][0] * d0 + self.cd[0][1] * d1;
        let y = self.cd[1][0] * d0 + self.cd[1][1] * d1;
        IntermediateCoord::new(x, y)
    }

    pub fn intermediate_to_pixel(&self, inter: IntermediateCoord) -> PixelCoord {
        let x = inter.x_deg();
        let y = inter.y_deg();
        let px = self.cd_inverse[0][0] * x + self.cd_inverse[0][1] * y + self.crpix[0];
        let py = self.cd_inverse[1][0] * x + self.cd_inverse[1][1] * y + self.crpix[1];
        PixelCoord::new(px, py)
    }

    #[inline]
    pub fn crpix(&self) -> [f64; 2] {
        self.crpix
    }

    #[inline]
    pub fn cd_matrix(&self) -> [[f64; 2]; 2] {
        self.cd
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.determinant
    }

    #[inline]
    pub fn pixel_scale(&self) -> f64 {
        libm::sqrt(self.determinant.abs())
    }
}

pub(crate) fn scale_rotation_cd(scale: f64, rotation_rad: f64) -> [[f64; 2]; 2] {
    let (sin_t, cos_t) = libm::sincos(rotation_rad);
    [
        [-scale * cos_t, scale * sin_t],
        [-scale * sin_t, -scale * cos_t],
    ]
}

#[inline]
pub(crate) fn determinant(m: [[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

fn compute_inverse(m: [[f64; 2]; 2], det: f64) -> [[f64; 2]; 2] {
    let inv_det = 1.0 / det;
    [
        [m[1][1] * inv_det, -m[0][1] * inv_det],
        [-m[1][0] * inv_det, m[0][0] * inv_det],
    ]
}
