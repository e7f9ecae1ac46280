use common::{Catalog, CategoryId};
use rand::Rng;

use super::skin::SkinMaterial;
use super::state::{Selection, SelectionMap};

/// Uniform draws consumed by a randomize pass.
pub trait RandomSource {
    /// Index in `[0, len)`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// Draws a full selection set, one category at a time in catalog order.
///
/// Per category: an asset index when it has assets, a coin when it is
/// removable (`true` clears the asset), a palette index when it has a
/// palette. The skin-driving category recolors `skin` as soon as its color
/// is drawn.
pub fn randomize_selections<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    skin_category: Option<&CategoryId>,
    skin: &SkinMaterial,
    rng: &mut R,
) -> SelectionMap {
    let mut selections = SelectionMap::with_capacity(catalog.len());

    for category in catalog.categories() {
        let mut asset = match category.assets.len() {
            0 => None,
            len => category.assets.get(rng.pick(len)).map(|a| a.id.clone()),
        };
        if category.removable && rng.coin_flip() {
            asset = None;
        }

        let color = match category.palette.len() {
            0 => None,
            len => category.palette.get(rng.pick(len)).cloned(),
        };

        if let Some(color) = &color {
            if skin_category == Some(&category.id) {
                skin.set_color(color.clone());
            }
        }

        selections.insert(category.id.clone(), Selection { asset, color });
    }

    selections
}
