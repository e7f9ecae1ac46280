//! What a renderer should show for the current customization.
//!
//! A [`RenderPlan`] is a read-only snapshot built from the state after each
//! change. Engines consume it through [`AssetRenderer`]; nothing in here
//! draws.

pub mod export;

use common::{Asset, CategoryId, Color};

use crate::customization::{CustomizationState, LockEntry};

pub use export::{ExportedFile, Exporter, ManifestExporter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView {
    /// No asset selected.
    Empty,
    Visible { asset: Asset, color: Option<Color> },
    /// An asset is selected but another selection occludes it. The selection
    /// itself is kept and reappears once the lockers go away.
    Hidden {
        asset: Asset,
        color: Option<Color>,
        locked_by: Vec<LockEntry>,
    },
}

impl SlotView {
    pub fn is_visible(&self) -> bool {
        matches!(self, SlotView::Visible { .. })
    }

    pub fn asset(&self) -> Option<&Asset> {
        match self {
            SlotView::Empty => None,
            SlotView::Visible { asset, .. } | SlotView::Hidden { asset, .. } => Some(asset),
        }
    }

    pub fn color(&self) -> Option<&Color> {
        match self {
            SlotView::Empty => None,
            SlotView::Visible { color, .. } | SlotView::Hidden { color, .. } => color.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub category_id: CategoryId,
    pub category_name: String,
    pub view: SlotView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub skin_color: Color,
    pub slots: Vec<Slot>,
}

impl RenderPlan {
    /// One slot per category, in catalog order.
    pub fn from_state(state: &CustomizationState) -> Self {
        let catalog = state.catalog();
        let suppression = state.suppression();

        let slots = state
            .selections()
            .map(|(category, selection)| {
                let asset = selection
                    .asset
                    .as_ref()
                    .and_then(|id| catalog.asset(id))
                    .cloned();
                let color = selection.color.clone();

                let view = match (asset, suppression.get(&category.id)) {
                    (None, _) => SlotView::Empty,
                    (Some(asset), Some(locks)) => SlotView::Hidden {
                        asset,
                        color,
                        locked_by: locks.to_vec(),
                    },
                    (Some(asset), None) => SlotView::Visible { asset, color },
                };

                Slot {
                    category_id: category.id.clone(),
                    category_name: category.name.clone(),
                    view,
                }
            })
            .collect();

        Self {
            skin_color: state.skin().color(),
            slots,
        }
    }

    pub fn slot(&self, category: &CategoryId) -> Option<&Slot> {
        self.slots.iter().find(|slot| &slot.category_id == category)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|slot| slot.view.is_visible())
    }
}

/// Consumer of render plans. Implementations must treat the plan as
/// read-only input.
pub trait AssetRenderer {
    fn apply(&mut self, plan: &RenderPlan);
}

/// Renderer that only logs what would be drawn.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: usize,
}

impl LogRenderer {
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl AssetRenderer for LogRenderer {
    fn apply(&mut self, plan: &RenderPlan) {
        self.frames += 1;
        log::info!("Skin tone {}", plan.skin_color);
        for slot in &plan.slots {
            match &slot.view {
                SlotView::Empty => log::info!("  {:<12} -", slot.category_name),
                SlotView::Visible { asset, color } => log::info!(
                    "  {:<12} {} [{}]",
                    slot.category_name,
                    asset.name,
                    color.as_ref().map_or("default", Color::as_str)
                ),
                SlotView::Hidden {
                    asset, locked_by, ..
                } => {
                    let lockers: Vec<&str> = locked_by
                        .iter()
                        .map(|entry| entry.asset_name.as_str())
                        .collect();
                    log::info!(
                        "  {:<12} {} (hidden by {})",
                        slot.category_name,
                        asset.name,
                        lockers.join(", ")
                    );
                }
            }
        }
    }
}
