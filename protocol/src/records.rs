//! Catalog records as stored by the backend.

use common::{Asset, AssetId, Category, CategoryId, Color, ColorParseError};
use serde::{Deserialize, Deserializer, Serialize};

/// Row of the categories collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: String,
    #[serde(default)]
    pub collection_id: String,
    pub name: String,
    #[serde(default)]
    pub position: i64,
    #[serde(default)]
    pub removable: bool,
    /// Relation field; the backend sends `""` when unset.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub starting_asset: Option<String>,
    #[serde(default)]
    pub color_palette: Option<Vec<String>>,
    #[serde(default)]
    pub created: String,
}

/// Row of the assets collection.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    #[serde(default)]
    pub collection_id: String,
    /// Owning category id.
    pub group: String,
    pub name: String,
    /// Thumbnail file name.
    #[serde(default)]
    pub thumbnail: String,
    /// Model file name.
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub locked_groups: Option<Vec<String>>,
    #[serde(default)]
    pub created: String,
}

/// Both collections in one document, as read from disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("category '{category}' has an invalid palette color: {source}")]
    InvalidPaletteColor {
        category: String,
        #[source]
        source: ColorParseError,
    },

    #[error("{collection} record is missing its id")]
    MissingId { collection: &'static str },
}

impl CategoryRecord {
    /// Converts the row into a category without assets.
    pub fn into_category(self) -> Result<Category, RecordError> {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingId {
                collection: "category",
            });
        }

        let palette = self
            .color_palette
            .unwrap_or_default()
            .iter()
            .map(|raw| raw.parse::<Color>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| RecordError::InvalidPaletteColor {
                category: self.name.clone(),
                source,
            })?;

        Ok(Category {
            id: CategoryId::new(self.id),
            name: self.name,
            position: self.position,
            removable: self.removable,
            palette,
            starting_asset: self.starting_asset.map(AssetId::new),
            assets: Vec::new(),
        })
    }
}

impl AssetRecord {
    /// Converts the row into an asset. `resolve_file` maps a stored file name
    /// to the reference the renderer loads (URL or path).
    pub fn into_asset<F>(self, resolve_file: F) -> Result<Asset, RecordError>
    where
        F: Fn(&AssetRecord, &str) -> String,
    {
        if self.id.trim().is_empty() {
            return Err(RecordError::MissingId { collection: "asset" });
        }

        let thumbnail = resolve_file(&self, &self.thumbnail);
        let model = resolve_file(&self, &self.file);
        let locks = self
            .locked_groups
            .unwrap_or_default()
            .into_iter()
            .filter(|id| !id.trim().is_empty())
            .map(CategoryId::new)
            .collect();

        Ok(Asset {
            id: AssetId::new(self.id),
            category: CategoryId::new(self.group),
            name: self.name,
            thumbnail,
            model,
            locks,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
