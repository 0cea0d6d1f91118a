use std::path::PathBuf;
use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read catalog stream: {source}")]
    Read {
        #[from]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Catalog must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn not_an_array(found: &'static str) -> Self {
        Self::NotAnArray { found }
    }
}
