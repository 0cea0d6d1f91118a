//! Rectangular field-of-view queries.
//!
//! The box is centered on `(ra, dec)` with the width converted to hours
//! (`/ 15`) and compared on raw RA, without a cos(dec) factor. All bounds are
//! inclusive.
//!
//! When the RA interval leaves [0, 24) both ends are reduced mod 24. If the
//! reduced minimum is above the maximum the box straddles 0h and matches
//! `[min, 24) ∪ [0, max]`:
//!
//! ```text
//!   center 0.05h, width 2°  ──►  [-0.0167h, 0.1167h]  ──►  [23.9833h, 24) ∪ [0, 0.1167h]
//! ```

use crate::entry::CatalogEntry;
use skyview_core::angle::{degrees_to_hours, wrap_hours};
use skyview_core::constants::HOURS_PER_DAY;

/// Parameters for [`StarCatalog::query`](crate::StarCatalog::query).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfViewQuery {
    /// Box center right ascension, in hours.
    pub center_ra_hours: f64,
    /// Box center declination, in degrees.
    pub center_dec_degrees: f64,
    /// Full width in degrees of RA.
    pub fov_width_degrees: f64,
    /// Full height in degrees of Dec.
    pub fov_height_degrees: f64,
    /// If set, exclude entries fainter than this magnitude.
    pub max_magnitude: Option<f64>,
}

/// Right ascension acceptance range, in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaRange {
    /// `[min, max]`.
    Interval { min: f64, max: f64 },
    /// `[min, 24) ∪ [0, max]`.
    Wrapped { min: f64, max: f64 },
    /// Width of a full circle or more.
    All,
}

impl RaRange {
    #[inline]
    pub fn contains(&self, ra_hours: f64) -> bool {
        match *self {
            Self::Interval { min, max } => ra_hours >= min && ra_hours <= max,
            Self::Wrapped { min, max } => ra_hours >= min || ra_hours <= max,
            Self::All => true,
        }
    }
}

impl FieldOfViewQuery {
    pub fn new(
        center_ra_hours: f64,
        center_dec_degrees: f64,
        fov_width_degrees: f64,
        fov_height_degrees: f64,
    ) -> Self {
        Self {
            center_ra_hours,
            center_dec_degrees,
            fov_width_degrees,
            fov_height_degrees,
            max_magnitude: None,
        }
    }

    pub fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = Some(max_magnitude);
        self
    }

    /// `(min, max)` declination in degrees.
    pub fn dec_range(&self) -> (f64, f64) {
        let half = self.fov_height_degrees / 2.0;
        (self.center_dec_degrees - half, self.center_dec_degrees + half)
    }

    pub fn ra_range(&self) -> RaRange {
        let width_hours = degrees_to_hours(self.fov_width_degrees);
        if width_hours >= HOURS_PER_DAY {
            return RaRange::All;
        }

        let min = self.center_ra_hours - width_hours / 2.0;
        let max = self.center_ra_hours + width_hours / 2.0;
        if min >= 0.0 && max < HOURS_PER_DAY {
            return RaRange::Interval { min, max };
        }

        let (min, max) = (wrap_hours(min), wrap_hours(max));
        if min > max {
            RaRange::Wrapped { min, max }
        } else {
            RaRange::Interval { min, max }
        }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let (min_dec, max_dec) = self.dec_range();
        if entry.dec_degrees < min_dec || entry.dec_degrees > max_dec {
            return false;
        }
        if !self.ra_range().contains(entry.ra_hours) {
            return false;
        }
        match self.max_magnitude {
            Some(limit) => !entry.is_fainter_than(limit),
            None => true,
        }
    }
}
