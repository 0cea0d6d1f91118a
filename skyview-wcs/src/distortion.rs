//! Empirical wide-angle correction in pixel space.
//!
//! Phone cameras with a ~66° field compress the image edges relative to a
//! pure stereographic mapping. The correction pushes a projected point
//! outward along its radius from the reference pixel:
//!
//! ```text
//! r' = r · (1 + k·(r / r_max)²)        r_max = min(crpix1, crpix2)
//! ```
//!
//! `k` defaults to 0.1. It is fitted, not derived from a lens model, and is
//! only applied in the sky-to-pixel direction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIAL_COEFFICIENT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadialCorrection {
    coefficient: f64,
}

impl RadialCorrection {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Scale factor for a point `r` pixels from the reference pixel.
    #[inline]
    pub fn factor(&self, r: f64, r_max: f64) -> f64 {
        let q = r / r_max;
        1.0 + self.coefficient * q * q
    }

    /// Corrected offset from the reference pixel. The origin is left alone.
    pub fn apply(&self, dx: f64, dy: f64, r_max: f64) -> (f64, f64) {
        let r = libm::hypot(dx, dy);
        if r.is_nan() || r <= 0.0 {
            return (dx, dy);
        }
        let f = self.factor(r, r_max);
        (dx * f, dy * f)
    }
}

impl Default for RadialCorrection {
    fn default() -> Self {
        Self::new(DEFAULT_RADIAL_COEFFICIENT)
    }
}
