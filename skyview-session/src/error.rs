use skyview_catalog::CatalogError;
use skyview_wcs::WcsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("projection error: {0}")]
    Projection(#[from] WcsError),
}

pub type Result<T> = std::result::Result<T, Error>;
