//! Catalog records and their JSON shape.
//!
//! A record looks like `{"Name": "Vega", "Ra": 18.615556, "Dec": 38.783611}`,
//! RA in hours and Dec in degrees. `Mag` is optional; lowercase keys
//! (`name`, `ra`, `dec`, `mag`/`magnitude`) are accepted too.

use serde::{Deserialize, Serialize};
use skyview_core::angle::wrap_hours;
use skyview_core::errors::{require_finite, require_in_range, SkyResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Right ascension in hours, [0, 24).
    pub ra_hours: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_degrees: f64,
    /// Apparent magnitude, when the source provides one.
    pub magnitude: Option<f64>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, ra_hours: f64, dec_degrees: f64) -> Self {
        Self {
            name: name.into(),
            ra_hours,
            dec_degrees,
            magnitude: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Fainter than `limit`? Entries without a magnitude never are.
    #[inline]
    pub fn is_fainter_than(&self, limit: f64) -> bool {
        matches!(self.magnitude, Some(m) if m > limit)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Name", alias = "name")]
    name: String,
    #[serde(rename = "Ra", alias = "ra", alias = "RA")]
    ra: f64,
    #[serde(rename = "Dec", alias = "dec", alias = "DEC")]
    dec: f64,
    #[serde(rename = "Mag", alias = "mag", alias = "magnitude", default)]
    magnitude: Option<f64>,
}

impl RawRecord {
    /// Validated entry. RA is wrapped into [0, 24); Dec outside [-90, 90]
    /// is rejected.
    pub(crate) fn into_entry(self) -> SkyResult<CatalogEntry> {
        let ra = require_finite("ra", self.ra)?;
        let dec = require_in_range("dec", self.dec, -90.0, 90.0)?;
        let magnitude = match self.magnitude {
            Some(m) => Some(require_finite("magnitude", m)?),
            None => None,
        };
        Ok(CatalogEntry {
            name: self.name,
            ra_hours: wrap_hours(ra),
            dec_degrees: dec,
            magnitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SkyResult<CatalogEntry> {
        serde_json::from_str::<RawRecord>(json).unwrap().into_entry()
    }

    #[test]
    fn test_capitalized_keys() {
        let e = parse(r#"{"Name": "Vega", "Ra": 18.615556, "Dec": 38.783611}"#).unwrap();
        assert_eq!(e.name, "Vega");
        assert_eq!(e.ra_hours, 18.615556);
        assert_eq!(e.dec_degrees, 38.783611);
        assert_eq!(e.magnitude, None);
    }

    #[test]
    fn test_lowercase_keys_and_magnitude() {
        let e = parse(r#"{"name": "Sirius", "ra": 6.752481, "dec": -16.716116, "mag": -1.46}"#).unwrap();
        assert_eq!(e.magnitude, Some(-1.46));

        let e = parse(r#"{"name": "Deneb", "ra": 20.69, "dec": 45.28, "magnitude": 1.25}"#).unwrap();
        assert_eq!(e.magnitude, Some(1.25));
    }

    #[test]
    fn test_ra_wrapped() {
        let e = parse(r#"{"Name": "x", "Ra": 24.5, "Dec": 0}"#).unwrap();
        assert_eq!(e.ra_hours, 0.5);
    }

    #[test]
    fn test_dec_out_of_range_rejected() {
        assert!(parse(r#"{"Name": "x", "Ra": 1.0, "Dec": 91.0}"#).is_err());
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        assert!(serde_json::from_str::<RawRecord>(r#"{"Name": "x", "Ra": 1.0}"#).is_err());
        assert!(serde_json::from_str::<RawRecord>(r#"{"Name": "x", "Ra": "1h", "Dec": 2}"#).is_err());
    }

    #[test]
    fn test_fainter_than() {
        let e = CatalogEntry::new("a", 0.0, 0.0);
        assert!(!e.is_fainter_than(-30.0));
        let e = e.with_magnitude(4.5);
        assert!(e.is_fainter_than(4.0));
        assert!(!e.is_fainter_than(4.5));
    }
}
