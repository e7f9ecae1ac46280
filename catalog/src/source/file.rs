use std::path::{Path, PathBuf};

use protocol::{AssetRecord, CatalogSnapshot, CategoryRecord};
use tokio::sync::OnceCell;

use super::CatalogSource;
use crate::error::{CatalogLoadError, Result};

/// Reads both collections from a JSON snapshot on disk.
///
/// The file is read once per source, so both collections of a load come
/// from the same snapshot. Create a new source to pick up later edits.
/// File references are resolved relative to the snapshot's directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    snapshot: OnceCell<CatalogSnapshot>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            snapshot: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn snapshot(&self) -> Result<&CatalogSnapshot> {
        self.snapshot
            .get_or_try_init(|| async {
                let bytes = tokio::fs::read(&self.path)
                    .await
                    .map_err(|source| CatalogLoadError::Io {
                        path: self.path.clone(),
                        source,
                    })?;
                log::debug!("Read catalog snapshot {}", self.path.display());
                Ok::<_, CatalogLoadError>(serde_json::from_slice(&bytes)?)
            })
            .await
    }
}

impl CatalogSource for FileSource {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>> {
        let mut categories = self.snapshot().await?.categories.clone();
        categories.sort_by_key(|record| record.position);
        Ok(categories)
    }

    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>> {
        let mut assets = self.snapshot().await?.assets.clone();
        assets.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(assets)
    }

    fn resolve_file(&self, _record: &AssetRecord, file_name: &str) -> String {
        if file_name.is_empty() {
            return String::new();
        }
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                dir.join(file_name).to_string_lossy().into_owned()
            }
            _ => file_name.to_string(),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
