//! The load-once star catalog.
//!
//! A [`StarCatalog`] is built once, typically at startup, and never mutated
//! afterwards. Share it behind an `Arc` for concurrent readers; queries take
//! `&self` and allocate only the result vector.
//!
//! Loading is forgiving per record and strict per document. Each array
//! element that fails to parse or validate is logged and skipped. A document
//! that is not JSON, or whose top level is not an array, fails the load.
//! [`StarCatalog::load_or_empty`] turns any load failure into an unloaded,
//! empty catalog whose queries return nothing.

use crate::entry::{CatalogEntry, RawRecord};
use crate::error::{CatalogError, CatalogResult};
use crate::query::FieldOfViewQuery;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Counts from one load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Elements of the top-level array.
    pub records_read: usize,
    /// Records accepted into the catalog.
    pub loaded: usize,
    /// Records skipped as malformed.
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    entries: Vec<CatalogEntry>,
    loaded: bool,
    report: LoadReport,
}

impl StarCatalog {
    /// An unloaded catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A loaded catalog holding `entries` as given.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let n = entries.len();
        Self {
            entries,
            loaded: true,
            report: LoadReport {
                records_read: n,
                loaded: n,
                skipped: 0,
            },
        }
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_json_value(document)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> CatalogResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }

    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        log::debug!("read {} lines from {}", text.lines().count(), path.display());
        Self::from_json_str(&text)
    }

    /// Opens `path`, or returns an unloaded empty catalog if that fails.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("star catalog unavailable: {e}");
                Self::empty()
            }
        }
    }

    fn from_json_value(document: Value) -> CatalogResult<Self> {
        let records = match document {
            Value::Array(records) => records,
            other => return Err(CatalogError::not_an_array(json_kind(&other))),
        };

        let mut report = LoadReport {
            records_read: records.len(),
            ..LoadReport::default()
        };
        let mut entries = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let parsed = serde_json::from_value::<RawRecord>(record)
                .map_err(|e| e.to_string())
                .and_then(|raw| raw.into_entry().map_err(|e| e.to_string()));
            match parsed {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    report.skipped += 1;
                    log::warn!("skipping catalog record {index}: {reason}");
                }
            }
        }
        report.loaded = entries.len();

        log::info!(
            "read {} records, loaded {} stars ({} skipped)",
            report.records_read,
            report.loaded,
            report.skipped
        );

        Ok(Self {
            entries,
            loaded: true,
            report,
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    pub fn find(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name))
    }

    pub fn query(&self, query: &FieldOfViewQuery) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| query.matches(e)).collect()
    }

    /// Entries inside the box, in catalog order. Pass `f64::INFINITY` as
    /// `max_magnitude` to disable the ceiling.
    pub fn stars_in_view(
        &self,
        center_ra_hours: f64,
        center_dec_degrees: f64,
        fov_width_degrees: f64,
        fov_height_degrees: f64,
        max_magnitude: f64,
    ) -> Vec<&CatalogEntry> {
        let query = FieldOfViewQuery::new(
            center_ra_hours,
            center_dec_degrees,
            fov_width_degrees,
            fov_height_degrees,
        )
        .with_max_magnitude(max_magnitude);
        self.query(&query)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARS: &str = r#"[
        {"Name": "Vega", "Ra": 18.615556, "Dec": 38.783611},
        {"Name": "Deneb", "Ra": 20.690532, "Dec": 45.280339},
        {"Name": "Altair", "Ra": 19.846389, "Dec": 8.868333}
    ]"#;

    #[test]
    fn test_empty_is_unloaded() {
        let c = StarCatalog::empty();
        assert!(!c.is_loaded());
        assert!(c.is_empty());
        assert!(c.stars_in_view(0.0, 0.0, 360.0, 180.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let c = StarCatalog::from_json_str(STARS).unwrap();
        assert!(c.is_loaded());
        assert_eq!(c.len(), 3);
        assert_eq!(
            c.load_report(),
            LoadReport {
                records_read: 3,
                loaded: 3,
                skipped: 0
            }
        );
        assert_eq!(c.find("vega").map(|e| e.dec_degrees), Some(38.783611));
    }

    #[test]
    fn test_malformed_records_skipped() {
        let json = r#"[
            {"Name": "Good", "Ra": 1.0, "Dec": 2.0},
            {"Name": "NoDec", "Ra": 1.0},
            42,
            {"Name": "BadDec", "Ra": 1.0, "Dec": 120.0},
            {"Ra": 3.0, "Dec": 4.0},
            {"name": "AlsoGood", "ra": 5.0, "dec": -6.0, "mag": 2.1}
        ]"#;
        let c = StarCatalog::from_json_str(json).unwrap();
        assert!(c.is_loaded());
        let names: Vec<_> = c.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Good", "AlsoGood"]);
        assert_eq!(c.load_report().skipped, 4);
        assert_eq!(c.load_report().records_read, 6);
    }

    #[test]
    fn test_top_level_must_be_array() {
        let err = StarCatalog::from_json_str(r#"{"Name": "Vega"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnArray { found: "an object" }));
        assert!(matches!(
            StarCatalog::from_json_str("not json"),
            Err(CatalogError::Json { .. })
        ));
    }

    #[test]
    fn test_empty_array_is_loaded() {
        let c = StarCatalog::from_json_str("[]").unwrap();
        assert!(c.is_loaded());
        assert!(c.is_empty());
    }

    #[test]
    fn test_from_reader() {
        let c = StarCatalog::from_reader(STARS.as_bytes()).unwrap();
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_summer_triangle_query() {
        let c = StarCatalog::from_json_str(STARS).unwrap();
        let found = c.stars_in_view(19.5, 30.0, 40.0, 50.0, f64::INFINITY);
        let mut names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        names.sort();
        assert_eq!(names, ["Altair", "Deneb", "Vega"]);

        let found = c.stars_in_view(19.5, 30.0, 40.0, 20.0, f64::INFINITY);
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Vega"]);
    }

    #[test]
    fn test_ra_wraparound_query() {
        let c = StarCatalog::from_entries(vec![
            CatalogEntry::new("near zero", 23.9, 0.0),
            CatalogEntry::new("opposite", 12.0, 0.0),
        ]);
        let found = c.stars_in_view(0.05, 0.0, 2.0, 2.0, f64::INFINITY);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "near zero");
    }
}
