//! Portable description of a composed character.
//!
//! The manifest lists, per category, which model the renderer composed and in
//! which color, so a downstream tool can rebuild or archive the outfit without
//! access to the live scene.

use common::{AssetId, CategoryId, Color};
use serde::{Deserialize, Serialize};

/// Bumped whenever a field changes meaning.
pub const MANIFEST_FORMAT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutfitManifest {
    pub format_version: u32,
    pub skin_color: Color,
    pub slots: Vec<ManifestSlot>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestSlot {
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<AssetId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Names of the assets hiding this slot; empty when visible.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hidden_by: Vec<String>,
}

impl OutfitManifest {
    #[must_use]
    pub fn new(skin_color: Color, slots: Vec<ManifestSlot>) -> Self {
        Self {
            format_version: MANIFEST_FORMAT_VERSION,
            skin_color,
            slots,
        }
    }

    /// Slots whose model ends up in the composed scene.
    pub fn visible_slots(&self) -> impl Iterator<Item = &ManifestSlot> {
        self.slots
            .iter()
            .filter(|slot| slot.asset_id.is_some() && slot.hidden_by.is_empty())
    }

    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl ManifestSlot {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.hidden_by.is_empty()
    }
}
