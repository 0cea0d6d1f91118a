//! Star catalog for field-of-view overlays.
//!
//! An explicit, load-once catalog object replaces process-wide star lists:
//! construct a [`StarCatalog`], share it by reference or `Arc`, and query it
//! with a rectangular RA/Dec box.
//!
//! ```
//! use skyview_catalog::StarCatalog;
//!
//! let catalog = StarCatalog::from_json_str(
//!     r#"[{"Name": "Polaris", "Ra": 2.530301, "Dec": 89.264109}]"#,
//! ).unwrap();
//! assert!(catalog.is_loaded());
//!
//! let near_pole = catalog.stars_in_view(2.5, 88.0, 30.0, 6.0, f64::INFINITY);
//! assert_eq!(near_pole[0].name, "Polaris");
//! ```
//!
//! # Logging
//!
//! Loading reports through the `log` facade: one `warn` per skipped record
//! and an `info` summary per load. Queries never log.

pub mod catalog;
pub mod entry;
pub mod error;
pub mod query;

pub use catalog::{LoadReport, StarCatalog};
pub use entry::CatalogEntry;
pub use error::{CatalogError, CatalogResult};
pub use query::{FieldOfViewQuery, RaRange};
