//! Bodies placed on a camera frame.
//!
//! Stars come from the catalog; planets, the Sun and the Moon are supplied
//! by the caller (their positions come from an external service). Every body
//! goes through the same projector and only those landing inside the image
//! are kept.
//!
//! The center square is the aiming reticle: a square of
//! `ratio · min(width, height)` pixels around the image center. The first
//! placed body inside it is the identified target. Failing that, the body
//! closest to the center is reported instead.

use skyview_catalog::CatalogEntry;
use skyview_coords::CelestialCoordinates;
use skyview_core::{format_dec, format_ra};
use skyview_wcs::{PixelCoord, SkyProjector};
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyKind {
    Star,
    Planet,
    Sun,
    Moon,
}

impl BodyKind {
    /// Kind of a solar-system body reported by name: `sun`, `moon`, or
    /// anything else as a planet.
    pub fn from_body_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("sun") {
            Self::Sun
        } else if name.eq_ignore_ascii_case("moon") {
            Self::Moon
        } else {
            Self::Planet
        }
    }

    /// Marker radius in pixels used when drawing this kind.
    pub fn marker_radius(&self) -> u32 {
        match self {
            Self::Sun => 35,
            Self::Moon => 30,
            Self::Planet => 25,
            Self::Star => 20,
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Star => "STAR",
            Self::Planet => "PLANET",
            Self::Sun => "SUN",
            Self::Moon => "MOON",
        };
        f.write_str(s)
    }
}

/// A body with a known equatorial position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyBody {
    pub name: String,
    pub kind: BodyKind,
    pub ra_hours: f64,
    pub dec_degrees: f64,
    pub magnitude: Option<f64>,
}

impl SkyBody {
    pub fn new(name: impl Into<String>, kind: BodyKind, ra_hours: f64, dec_degrees: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            ra_hours,
            dec_degrees,
            magnitude: None,
        }
    }

    /// A solar-system body, kind inferred from its name.
    pub fn solar_system(name: impl Into<String>, ra_hours: f64, dec_degrees: f64) -> Self {
        let name = name.into();
        let kind = BodyKind::from_body_name(&name);
        Self::new(name, kind, ra_hours, dec_degrees)
    }
}

impl From<&CatalogEntry> for SkyBody {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: BodyKind::Star,
            ra_hours: entry.ra_hours,
            dec_degrees: entry.dec_degrees,
            magnitude: entry.magnitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlacedBody {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub body: SkyBody,
    pub pixel: PixelCoord,
}

impl PlacedBody {
    pub fn formatted_ra(&self) -> String {
        format_ra(self.body.ra_hours)
    }

    pub fn formatted_dec(&self) -> String {
        format_dec(self.body.dec_degrees)
    }

    fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.pixel.x() - x).hypot(self.pixel.y() - y)
    }
}

/// Outcome of looking through the center square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterDetection<'a> {
    InSquare(&'a PlacedBody),
    Closest {
        body: &'a PlacedBody,
        distance_px: f64,
    },
    Nothing,
}

impl<'a> CenterDetection<'a> {
    pub fn body(&self) -> Option<&'a PlacedBody> {
        match *self {
            Self::InSquare(body) | Self::Closest { body, .. } => Some(body),
            Self::Nothing => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyOverlay {
    center: CelestialCoordinates,
    width: u32,
    height: u32,
    bodies: Vec<PlacedBody>,
}

impl SkyOverlay {
    pub fn new(center: CelestialCoordinates, width: u32, height: u32) -> Self {
        Self {
            center,
            width,
            height,
            bodies: Vec::new(),
        }
    }

    pub fn center(&self) -> &CelestialCoordinates {
        &self.center
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bodies(&self) -> &[PlacedBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Projects each body and keeps those inside the image. Returns how many
    /// were placed.
    pub fn place_bodies<I>(&mut self, projector: &SkyProjector, bodies: I) -> usize
    where
        I: IntoIterator<Item = SkyBody>,
    {
        let before = self.bodies.len();
        for body in bodies {
            let pixel = projector.celestial_to_pixel(body.ra_hours, body.dec_degrees);
            if pixel.is_within(self.width, self.height) {
                self.bodies.push(PlacedBody { body, pixel });
            }
        }
        self.bodies.len() - before
    }

    /// `(left, top, side)` of the center square in pixels.
    pub fn center_square(&self, ratio: f64) -> (f64, f64, f64) {
        let side = (self.width.min(self.height) as f64 * ratio).floor();
        let left = ((self.width as f64 - side) / 2.0).floor();
        let top = ((self.height as f64 - side) / 2.0).floor();
        (left, top, side)
    }

    pub fn identify_center(&self, ratio: f64) -> CenterDetection<'_> {
        let (left, top, side) = self.center_square(ratio);
        let inside = |p: &PixelCoord| {
            p.x() >= left && p.x() < left + side && p.y() >= top && p.y() < top + side
        };
        if let Some(hit) = self.bodies.iter().find(|b| inside(&b.pixel)) {
            return CenterDetection::InSquare(hit);
        }

        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        self.bodies
            .iter()
            .map(|b| (b, b.distance_to(cx, cy)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(CenterDetection::Nothing, |(body, distance_px)| {
                CenterDetection::Closest { body, distance_px }
            })
    }
}
