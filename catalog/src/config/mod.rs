use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CatalogLoadError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "catalog/config/catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    Pocketbase(PocketBaseConfig),
    File { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PocketBaseConfig {
    pub base_url: String,
    #[serde(default = "default_categories_collection")]
    pub categories_collection: String,
    #[serde(default = "default_assets_collection")]
    pub assets_collection: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_categories_collection() -> String {
    "CustomizationGroups".to_string()
}

fn default_assets_collection() -> String {
    "CustomizationAssets".to_string()
}

fn default_page_size() -> u32 {
    200
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl PocketBaseConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            categories_collection: default_categories_collection(),
            assets_collection: default_assets_collection(),
            page_size: default_page_size(),
            timeout_ms: default_timeout_ms(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl CatalogConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CatalogLoadError::Config(format!("Failed to read config file: {}", e))
        })?;

        let config: CatalogConfig = toml::from_str(&content).map_err(|e| {
            CatalogLoadError::Config(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `CATALOG_FILE` / `CATALOG_BASE_URL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("CATALOG_BASE_URL").ok(),
            std::env::var("CATALOG_FILE").ok(),
        )
    }

    /// A file override wins over a base URL override. Overriding the base URL
    /// of an already configured backend keeps its collection settings.
    pub fn with_overrides(self, base_url: Option<String>, file: Option<String>) -> Self {
        if let Some(path) = file.filter(|value| !value.trim().is_empty()) {
            return Self {
                source: SourceConfig::File {
                    path: PathBuf::from(path),
                },
            };
        }

        match base_url.filter(|value| !value.trim().is_empty()) {
            Some(base_url) => {
                let backend = match self.source {
                    SourceConfig::Pocketbase(existing) => PocketBaseConfig {
                        base_url,
                        ..existing
                    },
                    SourceConfig::File { .. } => PocketBaseConfig::new(base_url),
                };
                Self {
                    source: SourceConfig::Pocketbase(backend),
                }
            }
            None => self,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match &self.source {
            SourceConfig::Pocketbase(backend) => {
                if backend.base_url.trim().is_empty() {
                    return Err(CatalogLoadError::Config(
                        "source.base_url must not be empty".to_string(),
                    ));
                }
                if backend.page_size == 0 {
                    return Err(CatalogLoadError::Config(
                        "source.page_size must be greater than zero".to_string(),
                    ));
                }
            }
            SourceConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(CatalogLoadError::Config(
                        "source.path must not be empty".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::Pocketbase(PocketBaseConfig::new("http://127.0.0.1:8090")),
        }
    }
}
