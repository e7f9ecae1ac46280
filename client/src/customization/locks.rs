//! Derivation of which categories are hidden by other selections.

use std::collections::BTreeMap;

use common::{Catalog, CategoryId};
use serde::Serialize;

use super::state::SelectionMap;

/// One reason a category is hidden: the selected asset that occludes it and
/// the name of that asset's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockEntry {
    pub asset_name: String,
    pub category_name: String,
}

/// Hidden categories and every asset responsible for hiding each one.
///
/// Always a pure function of the current selections and the catalog, rebuilt
/// after each mutation. Categories that are not hidden have no key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressionMap {
    entries: BTreeMap<CategoryId, Vec<LockEntry>>,
}

impl SuppressionMap {
    pub fn get(&self, category: &CategoryId) -> Option<&[LockEntry]> {
        self.entries.get(category).map(Vec::as_slice)
    }

    pub fn is_suppressed(&self, category: &CategoryId) -> bool {
        self.entries.contains_key(category)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &[LockEntry])> {
        self.entries
            .iter()
            .map(|(category, locks)| (category, locks.as_slice()))
    }
}

/// Walks categories in catalog order and, for each selected asset that locks
/// other categories, appends an entry to every locked category. Entries are
/// not deduplicated.
pub fn resolve_locks(catalog: &Catalog, selections: &SelectionMap) -> SuppressionMap {
    let mut entries: BTreeMap<CategoryId, Vec<LockEntry>> = BTreeMap::new();

    for category in catalog.categories() {
        let Some(asset_id) = selections
            .get(&category.id)
            .and_then(|selection| selection.asset.as_ref())
        else {
            continue;
        };
        let Some(asset) = catalog.asset(asset_id) else {
            continue;
        };

        for locked in &asset.locks {
            entries.entry(locked.clone()).or_default().push(LockEntry {
                asset_name: asset.name.clone(),
                category_name: category.name.clone(),
            });
        }
    }

    SuppressionMap { entries }
}
