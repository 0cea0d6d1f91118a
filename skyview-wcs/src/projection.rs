//! Zenithal projections about a tangent point.
//!
//! | Variant | Plane radius R(c) | Inverse | Suited to |
//! |---------|-------------------|---------|-----------|
//! | [`Projection::Stereographic`] | `2·tan(c/2)` | `c = 2·atan(ρ/2)` | wide fields, ~60° and up |
//! | [`Projection::Gnomonic`] | `tan(c)` | `c = atan(ρ)` | narrow fields |
//!
//! `c` is the angular distance from the tangent point. Both share the same
//! hemisphere cutoff: anything with `cos c <= 0` has no image and projects to
//! `None`. Deprojection near the tangent point (`ρ < 1e-10`) returns the
//! tangent point itself.

use crate::coordinate::IntermediateCoord;
use skyview_core::constants::RAD_TO_DEG;
use skyview_core::math::cos_separation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const RHO_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Projection {
    #[default]
    Stereographic,
    Gnomonic,
}

/// Reference point of a projection, cached with its sine and cosine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPoint {
    ra_rad: f64,
    dec_rad: f64,
    sin_dec: f64,
    cos_dec: f64,
}

impl TangentPoint {
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        let dec_rad = dec_deg.to_radians();
        let (sin_dec, cos_dec) = libm::sincos(dec_rad);
        Self {
            ra_rad: ra_deg.to_radians(),
            dec_rad,
            sin_dec,
            cos_dec,
        }
    }

    pub fn ra_rad(&self) -> f64 {
        self.ra_rad
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_rad
    }
}

impl Projection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stereographic => "stereographic",
            Self::Gnomonic => "gnomonic",
        }
    }

    /// Plane coordinates in degrees of `(ra, dec)` (radians), or `None` on or
    /// beyond the far hemisphere.
    pub fn project(&self, tangent: &TangentPoint, ra_rad: f64, dec_rad: f64) -> Option<IntermediateCoord> {
        let cos_c = cos_separation(ra_rad, dec_rad, tangent.ra_rad, tangent.dec_rad);
        if cos_c.is_nan() || cos_c <= 0.0 {
            return None;
        }

        let (sin_dec, cos_dec) = libm::sincos(dec_rad);
        let (sin_dra, cos_dra) = libm::sincos(ra_rad - tangent.ra_rad);

        let x = cos_dec * sin_dra;
        let y = sin_dec * tangent.cos_dec - cos_dec * tangent.sin_dec * cos_dra;

        let (x, y) = match self {
            Self::Stereographic => {
                let d = 1.0 + cos_c;
                (2.0 * x / d, 2.0 * y / d)
            }
            Self::Gnomonic => (x / cos_c, y / cos_c),
        };

        Some(IntermediateCoord::new(x * RAD_TO_DEG, y * RAD_TO_DEG))
    }

    /// `(ra, dec)` in radians for plane coordinates. RA is not wrapped.
    pub fn deproject(&self, tangent: &TangentPoint, inter: IntermediateCoord) -> (f64, f64) {
        let x = inter.x_rad();
        let y = inter.y_rad();
        let rho = libm::hypot(x, y);
        if rho < RHO_EPSILON {
            return (tangent.ra_rad, tangent.dec_rad);
        }

        let c = match self {
            Self::Stereographic => 2.0 * libm::atan(rho / 2.0),
            Self::Gnomonic => libm::atan(rho),
        };
        let (sin_c, cos_c) = libm::sincos(c);

        let sin_dec = cos_c * tangent.sin_dec + y * sin_c * tangent.cos_dec / rho;
        let dec = libm::asin(sin_dec.clamp(-1.0, 1.0));
        let ra = tangent.ra_rad
            + libm::atan2(
                x * sin_c,
                rho * tangent.cos_dec * cos_c - y * sin_c * tangent.sin_dec,
            );

        (ra, dec)
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Projection {
    type Err = crate::error::WcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stereographic" | "stg" => Ok(Self::Stereographic),
            "gnomonic" | "tan" => Ok(Self::Gnomonic),
            other => Err(crate::error::WcsError::invalid_parameter(format!(
                "unknown projection '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Projection; 2] = [Projection::Stereographic, Projection::Gnomonic];

    #[test]
    fn test_tangent_point_projects_to_origin() {
        let t = TangentPoint::from_degrees(83.6, 22.0);
        for p in ALL {
            let i = p.project(&t, t.ra_rad(), t.dec_rad()).unwrap();
            assert_eq!(i.x_deg(), 0.0);
            assert_eq!(i.y_deg(), 0.0);
        }
    }

    #[test]
    fn test_radius_along_meridian() {
        // A point 10° north of an equatorial tangent point.
        let t = TangentPoint::from_degrees(0.0, 0.0);
        let c = 10f64.to_radians();

        let stg = Projection::Stereographic.project(&t, 0.0, c).unwrap();
        assert_abs_diff_eq!(stg.x_deg(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stg.y_deg(), 2.0 * (c / 2.0).tan() * RAD_TO_DEG, epsilon = 1e-12);

        let tan = Projection::Gnomonic.project(&t, 0.0, c).unwrap();
        assert_abs_diff_eq!(tan.y_deg(), c.tan() * RAD_TO_DEG, epsilon = 1e-12);
    }

    #[test]
    fn test_east_is_positive_x() {
        let t = TangentPoint::from_degrees(100.0, 30.0);
        for p in ALL {
            let i = p.project(&t, 101f64.to_radians(), 30f64.to_radians()).unwrap();
            assert!(i.x_deg() > 0.0, "{p}");
        }
    }

    #[test]
    fn test_far_hemisphere_is_none() {
        let t = TangentPoint::from_degrees(0.0, 0.0);
        for p in ALL {
            assert!(p.project(&t, 90.0001f64.to_radians(), 0.0).is_none());
            assert!(p.project(&t, 180f64.to_radians(), 0.0).is_none());
            assert!(p.project(&t, 0.0, -90.5f64.to_radians()).is_none());
            assert!(p.project(&t, 89.9f64.to_radians(), 0.0).is_some());
        }
    }

    #[test]
    fn test_nan_input_is_none() {
        let t = TangentPoint::from_degrees(0.0, 0.0);
        assert!(Projection::Gnomonic.project(&t, f64::NAN, 0.0).is_none());
    }

    #[test]
    fn test_deproject_inverts_project() {
        let t = TangentPoint::from_degrees(200.0, -40.0);
        for p in ALL {
            for (ra, dec) in [(205.0, -35.0), (190.0, -60.0), (230.0, -20.0)] {
                let i = p.project(&t, f64::to_radians(ra), f64::to_radians(dec)).unwrap();
                let (ra2, dec2) = p.deproject(&t, i);
                assert_abs_diff_eq!(ra2.to_degrees(), ra, epsilon = 1e-9);
                assert_abs_diff_eq!(dec2.to_degrees(), dec, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_deproject_origin_returns_tangent() {
        let t = TangentPoint::from_degrees(12.0, 34.0);
        for p in ALL {
            let (ra, dec) = p.deproject(&t, IntermediateCoord::new(1e-13, -1e-13));
            assert_eq!(ra, t.ra_rad());
            assert_eq!(dec, t.dec_rad());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Stereographic".parse::<Projection>().unwrap(), Projection::Stereographic);
        assert_eq!("tan".parse::<Projection>().unwrap(), Projection::Gnomonic);
        assert!("mercator".parse::<Projection>().is_err());
        assert_eq!(Projection::default(), Projection::Stereographic);
    }
}
