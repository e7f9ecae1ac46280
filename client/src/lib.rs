pub mod customization;
pub mod render;
pub mod settings;
pub mod stage;

pub use customization::{CustomizationState, CustomizeError, Selection, SuppressionMap};
pub use render::{AssetRenderer, RenderPlan, SlotView};
pub use stage::{Stage, ViewMode};
