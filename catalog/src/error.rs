use std::path::PathBuf;

use common::CatalogError;
use protocol::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read catalog file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    Record(#[from] RecordError),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogLoadError>;
