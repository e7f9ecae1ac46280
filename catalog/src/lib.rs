// Catalog loading: sources, configuration and the one-shot loader.

pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use config::{CatalogConfig, PocketBaseConfig, SourceConfig};
pub use error::{CatalogLoadError, Result};
pub use loader::load_catalog;
pub use source::{CatalogSource, ConfiguredSource, FileSource, PocketBaseSource};
