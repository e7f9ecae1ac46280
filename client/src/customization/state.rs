use std::collections::HashMap;

use common::{AssetId, Catalog, Category, CategoryId, Color};
use serde::Serialize;

use super::error::{CustomizeError, Result};
use super::locks::{SuppressionMap, resolve_locks};
use super::randomizer::{RandomSource, randomize_selections};
use super::skin::SkinMaterial;

/// The chosen asset and color of one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub asset: Option<AssetId>,
    pub color: Option<Color>,
}

impl Selection {
    /// Initial selection: the declared starting asset and the first palette
    /// entry, each empty when the category declares none.
    pub fn initial(category: &Category) -> Self {
        Self {
            asset: category.starting_asset.clone(),
            color: category.default_color().cloned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.asset.is_none()
    }
}

pub type SelectionMap = HashMap<CategoryId, Selection>;

/// Per-category selections for one session, plus the state derived from them.
///
/// Holds exactly one [`Selection`] for every catalog category from
/// construction on. Every mutating operation recomputes the suppression map
/// before returning, and a failed operation leaves everything untouched.
#[derive(Debug, Clone)]
pub struct CustomizationState {
    catalog: Catalog,
    selections: SelectionMap,
    suppression: SuppressionMap,
    skin: SkinMaterial,
    skin_category: Option<CategoryId>,
}

impl CustomizationState {
    pub fn new(catalog: Catalog, skin_category_name: &str, default_skin_tone: Color) -> Self {
        let skin_category = catalog
            .category_by_name(skin_category_name)
            .map(|category| category.id.clone());
        if skin_category.is_none() {
            log::info!(
                "No category named '{}'; skin tone stays at {}",
                skin_category_name,
                default_skin_tone
            );
        }

        let selections: SelectionMap = catalog
            .categories()
            .iter()
            .map(|category| (category.id.clone(), Selection::initial(category)))
            .collect();

        let skin = SkinMaterial::new(default_skin_tone);
        if let Some(color) = skin_category
            .as_ref()
            .and_then(|id| selections.get(id))
            .and_then(|selection| selection.color.clone())
        {
            skin.set_color(color);
        }

        let suppression = resolve_locks(&catalog, &selections);

        Self {
            catalog,
            selections,
            suppression,
            skin,
            skin_category,
        }
    }

    /// Replaces the asset of `category`, keeping its color.
    ///
    /// `None` clears the slot, which only removable categories allow once
    /// they hold an asset.
    pub fn set_asset(&mut self, category: &CategoryId, asset: Option<&AssetId>) -> Result<()> {
        let owner = self.category(category)?;

        match asset {
            Some(asset_id) => {
                let found = self
                    .catalog
                    .asset(asset_id)
                    .ok_or_else(|| CustomizeError::UnknownAsset(asset_id.clone()))?;
                if &found.category != category {
                    return Err(CustomizeError::AssetNotInCategory {
                        asset: asset_id.clone(),
                        category: category.clone(),
                        owner: found.category.clone(),
                    });
                }
            }
            None => {
                let holds_asset = self
                    .selections
                    .get(category)
                    .is_some_and(|selection| selection.asset.is_some());
                if holds_asset && !owner.removable {
                    return Err(CustomizeError::NotRemovable(category.clone()));
                }
            }
        }

        log::debug!(
            "Category '{}' asset -> {}",
            category,
            asset.map_or("none", AssetId::as_str)
        );
        self.selections.entry(category.clone()).or_default().asset = asset.cloned();
        self.recompute_locks();
        Ok(())
    }

    /// Replaces the color of `category`. Driving the skin category also
    /// recolors the shared skin material.
    pub fn set_color(&mut self, category: &CategoryId, color: Color) -> Result<()> {
        let owner = self.category(category)?;
        if owner.has_palette() && !owner.palette_contains(&color) {
            return Err(CustomizeError::PaletteMismatch {
                category: category.clone(),
                color,
            });
        }

        log::debug!("Category '{}' color -> {}", category, color);
        if self.drives_skin(category) {
            self.skin.set_color(color.clone());
        }
        self.selections.entry(category.clone()).or_default().color = Some(color);
        self.recompute_locks();
        Ok(())
    }

    /// Replaces every selection with a random draw in one step.
    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let selections = randomize_selections(
            &self.catalog,
            self.skin_category.as_ref(),
            &self.skin,
            rng,
        );
        self.selections = selections;
        self.recompute_locks();
        log::debug!(
            "Randomized {} categories, {} hidden",
            self.selections.len(),
            self.suppression.len()
        );
    }

    pub fn selection(&self, category: &CategoryId) -> Option<&Selection> {
        self.selections.get(category)
    }

    /// Selections in catalog order.
    pub fn selections(&self) -> impl Iterator<Item = (&Category, &Selection)> {
        self.catalog.categories().iter().filter_map(|category| {
            self.selections
                .get(&category.id)
                .map(|selection| (category, selection))
        })
    }

    pub fn suppression(&self) -> &SuppressionMap {
        &self.suppression
    }

    /// Read handle to the shared skin material.
    pub fn skin(&self) -> &SkinMaterial {
        &self.skin
    }

    pub fn skin_category(&self) -> Option<&CategoryId> {
        self.skin_category.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_hidden(&self, category: &CategoryId) -> bool {
        self.suppression.is_suppressed(category)
    }

    fn category(&self, id: &CategoryId) -> Result<&Category> {
        self.catalog
            .category(id)
            .ok_or_else(|| CustomizeError::InvalidCategory(id.clone()))
    }

    fn drives_skin(&self, category: &CategoryId) -> bool {
        self.skin_category.as_ref() == Some(category)
    }

    fn recompute_locks(&mut self) {
        self.suppression = resolve_locks(&self.catalog, &self.selections);
    }
}
