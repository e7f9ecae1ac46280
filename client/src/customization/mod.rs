//! Selection state for one customization session and everything derived
//! from it: hidden categories and the shared skin tone.

pub mod error;
pub mod locks;
pub mod randomizer;
pub mod skin;
pub mod state;

pub use error::{CustomizeError, Result};
pub use locks::{LockEntry, SuppressionMap, resolve_locks};
pub use randomizer::{RandomSource, randomize_selections};
pub use skin::SkinMaterial;
pub use state::{CustomizationState, Selection, SelectionMap};
