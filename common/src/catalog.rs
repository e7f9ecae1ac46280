use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::color::Color;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of a customization category (backend record id).
    CategoryId
);
record_id!(
    /// Identifier of a selectable asset (backend record id).
    AssetId
);

/// One selectable item within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub category: CategoryId,
    pub name: String,
    /// Thumbnail reference (URL or path) used by pickers.
    pub thumbnail: String,
    /// Model file reference (URL or path) loaded by the renderer.
    pub model: String,
    /// Categories hidden while this asset is selected.
    pub locks: Vec<CategoryId>,
}

impl Asset {
    pub fn locks_any(&self) -> bool {
        !self.locks.is_empty()
    }
}

/// A customization slot with its assets and optional color palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub position: i64,
    /// Whether the selection may be left empty.
    pub removable: bool,
    pub palette: Vec<Color>,
    pub starting_asset: Option<AssetId>,
    pub assets: Vec<Asset>,
}

impl Category {
    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| &asset.id == id)
    }

    pub fn has_palette(&self) -> bool {
        !self.palette.is_empty()
    }

    pub fn palette_contains(&self, color: &Color) -> bool {
        self.palette.contains(color)
    }

    /// First palette entry, used as the initial color.
    pub fn default_color(&self) -> Option<&Color> {
        self.palette.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,

    #[error("duplicate category id '{0}'")]
    DuplicateCategory(CategoryId),

    #[error("duplicate asset id '{0}'")]
    DuplicateAsset(AssetId),

    #[error("asset '{asset}' references unknown category '{category}'")]
    UnknownCategory { asset: AssetId, category: CategoryId },

    #[error("asset '{asset}' locks unknown category '{target}'")]
    UnknownLockTarget { asset: AssetId, target: CategoryId },

    #[error("asset '{asset}' locks its own category '{category}'")]
    SelfLock { asset: AssetId, category: CategoryId },

    #[error("starting asset '{asset}' of category '{category}' is not one of its assets")]
    StartingAssetNotInCategory { category: CategoryId, asset: AssetId },
}

/// The joined, validated set of categories for a session.
///
/// Categories are ordered by `position` ascending. Within a category, assets
/// keep the order in which the source delivered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    category_index: HashMap<CategoryId, usize>,
    asset_index: HashMap<AssetId, (usize, usize)>,
}

impl Catalog {
    /// Joins `assets` into `categories` by category reference and validates
    /// the result. Any `assets` already present on the categories are kept.
    pub fn assemble(
        mut categories: Vec<Category>,
        assets: Vec<Asset>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        categories.sort_by_key(|category| category.position);

        let mut category_index = HashMap::with_capacity(categories.len());
        for (index, category) in categories.iter().enumerate() {
            if category_index.insert(category.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        for asset in assets {
            let Some(&index) = category_index.get(&asset.category) else {
                return Err(CatalogError::UnknownCategory {
                    asset: asset.id,
                    category: asset.category,
                });
            };
            categories[index].assets.push(asset);
        }

        let mut asset_index = HashMap::new();
        for (category_pos, category) in categories.iter().enumerate() {
            for (asset_pos, asset) in category.assets.iter().enumerate() {
                if asset_index
                    .insert(asset.id.clone(), (category_pos, asset_pos))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateAsset(asset.id.clone()));
                }
                validate_locks(asset, &category_index)?;
            }

            if let Some(starting) = &category.starting_asset {
                if category.asset(starting).is_none() {
                    return Err(CatalogError::StartingAssetNotInCategory {
                        category: category.id.clone(),
                        asset: starting.clone(),
                    });
                }
            }
        }

        Ok(Self {
            categories,
            category_index,
            asset_index,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn asset_count(&self) -> usize {
        self.asset_index.len()
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.category_index
            .get(id)
            .and_then(|&index| self.categories.get(index))
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        let &(category, asset) = self.asset_index.get(id)?;
        self.categories.get(category)?.assets.get(asset)
    }

    pub fn contains_category(&self, id: &CategoryId) -> bool {
        self.category_index.contains_key(id)
    }
}

fn validate_locks(
    asset: &Asset,
    category_index: &HashMap<CategoryId, usize>,
) -> Result<(), CatalogError> {
    for target in &asset.locks {
        if target == &asset.category {
            return Err(CatalogError::SelfLock {
                asset: asset.id.clone(),
                category: asset.category.clone(),
            });
        }
        if !category_index.contains_key(target) {
            return Err(CatalogError::UnknownLockTarget {
                asset: asset.id.clone(),
                target: target.clone(),
            });
        }
    }
    Ok(())
}
