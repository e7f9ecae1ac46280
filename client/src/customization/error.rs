use common::{AssetId, CategoryId, Color};

/// Rejected customization operations. None of these leave partial changes
/// behind: the state is untouched when an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustomizeError {
    #[error("Unknown category '{0}'")]
    InvalidCategory(CategoryId),

    #[error("Unknown asset '{0}'")]
    UnknownAsset(AssetId),

    #[error("Asset '{asset}' belongs to category '{owner}', not '{category}'")]
    AssetNotInCategory {
        asset: AssetId,
        category: CategoryId,
        owner: CategoryId,
    },

    #[error("Category '{0}' is not removable")]
    NotRemovable(CategoryId),

    #[error("Color '{color}' is not in the palette of category '{category}'")]
    PaletteMismatch { category: CategoryId, color: Color },
}

pub type Result<T> = std::result::Result<T, CustomizeError>;
