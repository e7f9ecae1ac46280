//! Wire formats shared between the catalog loader and the customizer.
//!
//! Catalog records mirror the JSON a PocketBase-style backend returns for the
//! category and asset collections. The outfit manifest is the portable
//! description of a composed character produced on export.

pub mod manifest;
pub mod page;
pub mod records;

pub use manifest::{MANIFEST_FORMAT_VERSION, ManifestSlot, OutfitManifest};
pub use page::ListPage;
pub use records::{AssetRecord, CatalogSnapshot, CategoryRecord, RecordError};

/// Returns the protocol crate version string.
pub fn protocol_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
