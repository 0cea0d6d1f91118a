#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Image position in pixels, origin at the top-left corner.
///
/// A NaN pair is the "not visible" sentinel; check [`is_defined`](Self::is_defined)
/// before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PixelCoord {
    x: f64,
    y: f64,
}

impl PixelCoord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True for a defined position inside `[0, width) × [0, height)`.
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.is_defined()
            && self.x >= 0.0
            && self.x < width as f64
            && self.y >= 0.0
            && self.y < height as f64
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for PixelCoord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Tangent-plane coordinates in degrees, before the CD matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntermediateCoord {
    x: f64,
    y: f64,
}

impl IntermediateCoord {
    #[inline]
    pub fn new(x_deg: f64, y_deg: f64) -> Self {
        Self { x: x_deg, y: y_deg }
    }

    #[inline]
    pub fn x_deg(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y_deg(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn x_rad(&self) -> f64 {
        self.x.to_radians()
    }

    #[inline]
    pub fn y_rad(&self) -> f64 {
        self.y.to_radians()
    }
}

/// Equatorial position, RA in hours and Dec in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyCoord {
    ra_hours: f64,
    dec_degrees: f64,
}

impl SkyCoord {
    #[inline]
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Self {
        Self {
            ra_hours,
            dec_degrees,
        }
    }

    #[inline]
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    #[inline]
    pub fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    #[inline]
    pub fn dec_degrees(&self) -> f64 {
        self.dec_degrees
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.ra_hours.is_finite() && self.dec_degrees.is_finite()
    }
}
