use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling a trader from its configuration
///
/// These are setup failures. A trader that cannot price every slot is
/// never constructed, so nothing downstream has to handle a missing price.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog has no entries
    #[error("trade catalog must contain at least one item")]
    EmptyCatalog,

    /// The sell boundary does not index into the catalog
    #[error("sell boundary {boundary} is out of range for a catalog of {len} items")]
    SellBoundaryOutOfRange { boundary: usize, len: usize },

    /// A catalog item has no sale price
    #[error("no sale price configured for '{0}'")]
    MissingSalePrice(String),

    /// A catalog item has no purchase price
    #[error("no purchase price configured for '{0}'")]
    MissingPurchasePrice(String),

    /// The config file could not be read
    #[error("failed to read trader config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid trader JSON
    #[error("failed to parse trader config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}
