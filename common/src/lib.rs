//! Wardrobe Catalog Definitions
//!
//! This crate defines the customization catalog shared by the loader and the
//! customization core. A category is a customization slot such as "Hair" or
//! "Top" with its own assets and an optional color palette.
//!
//! The catalog is assembled once per session and is read-only afterwards.
//! Structural rules such as unique ids and known lock targets are checked in
//! [`Catalog::assemble`]; readers never re-validate shape.

pub mod catalog;
pub mod color;

pub use catalog::{Asset, AssetId, Catalog, CatalogError, Category, CategoryId};
pub use color::{Color, ColorParseError};
