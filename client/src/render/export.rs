use anyhow::Context;
use protocol::{ManifestSlot, OutfitManifest};

use super::{RenderPlan, SlotView};

/// Bytes produced by an export, ready to be saved under `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Turns what is currently shown into a portable file.
pub trait Exporter {
    fn export(&mut self, plan: &RenderPlan) -> anyhow::Result<ExportedFile>;
}

/// Writes the outfit as a JSON manifest instead of an encoded model.
#[derive(Debug, Clone)]
pub struct ManifestExporter {
    file_name: String,
}

impl ManifestExporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn manifest(plan: &RenderPlan) -> OutfitManifest {
        let slots = plan
            .slots
            .iter()
            .map(|slot| {
                let asset = slot.view.asset();
                let hidden_by = match &slot.view {
                    SlotView::Hidden { locked_by, .. } => locked_by
                        .iter()
                        .map(|entry| entry.asset_name.clone())
                        .collect(),
                    _ => Vec::new(),
                };
                ManifestSlot {
                    category_id: slot.category_id.clone(),
                    category_name: slot.category_name.clone(),
                    asset_id: asset.map(|a| a.id.clone()),
                    asset_name: asset.map(|a| a.name.clone()),
                    model: asset.map(|a| a.model.clone()),
                    color: slot.view.color().cloned(),
                    hidden_by,
                }
            })
            .collect();

        OutfitManifest::new(plan.skin_color.clone(), slots)
    }
}

impl Exporter for ManifestExporter {
    fn export(&mut self, plan: &RenderPlan) -> anyhow::Result<ExportedFile> {
        let manifest = Self::manifest(plan);
        let bytes = manifest
            .to_json_pretty()
            .context("Failed to encode outfit manifest")?;
        log::info!(
            "Exported {} ({} visible slots, {} bytes)",
            self.file_name,
            manifest.visible_slots().count(),
            bytes.len()
        );
        Ok(ExportedFile {
            file_name: self.file_name.clone(),
            bytes,
        })
    }
}
