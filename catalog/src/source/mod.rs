mod file;
mod pocketbase;

use std::future::Future;

use protocol::{AssetRecord, CategoryRecord};

use crate::config::SourceConfig;
use crate::error::Result;

pub use file::FileSource;
pub use pocketbase::PocketBaseSource;

/// Remote or local store holding the category and asset collections.
pub trait CatalogSource {
    /// Categories ordered by position, ascending.
    fn fetch_categories(&self) -> impl Future<Output = Result<Vec<CategoryRecord>>> + Send;

    /// Assets ordered by creation time, newest first.
    fn fetch_assets(&self) -> impl Future<Output = Result<Vec<AssetRecord>>> + Send;

    /// Maps a stored file name of `record` to the reference the renderer loads.
    fn resolve_file(&self, _record: &AssetRecord, file_name: &str) -> String {
        file_name.to_string()
    }

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The source selected by [`SourceConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    PocketBase(PocketBaseSource),
    File(FileSource),
}

impl ConfiguredSource {
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        match config {
            SourceConfig::Pocketbase(backend) => {
                Ok(Self::PocketBase(PocketBaseSource::new(backend)?))
            }
            SourceConfig::File { path } => Ok(Self::File(FileSource::new(path))),
        }
    }
}

impl CatalogSource for ConfiguredSource {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>> {
        match self {
            Self::PocketBase(source) => source.fetch_categories().await,
            Self::File(source) => source.fetch_categories().await,
        }
    }

    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>> {
        match self {
            Self::PocketBase(source) => source.fetch_assets().await,
            Self::File(source) => source.fetch_assets().await,
        }
    }

    fn resolve_file(&self, record: &AssetRecord, file_name: &str) -> String {
        match self {
            Self::PocketBase(source) => source.resolve_file(record, file_name),
            Self::File(source) => source.resolve_file(record, file_name),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::PocketBase(source) => source.describe(),
            Self::File(source) => source.describe(),
        }
    }
}
