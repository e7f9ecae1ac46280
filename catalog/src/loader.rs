use common::Catalog;
use protocol::CategoryRecord;

use crate::error::Result;
use crate::source::CatalogSource;

/// Fetches both collections once, joins them and validates the result.
///
/// Nothing is retried; any failure is returned to the caller, which decides
/// whether to attempt the whole load again.
pub async fn load_catalog<S: CatalogSource>(source: &S) -> Result<Catalog> {
    log::info!("Loading catalog from {}...", source.describe());

    let category_records = source.fetch_categories().await?;
    let asset_records = source.fetch_assets().await?;

    let categories = category_records
        .into_iter()
        .map(CategoryRecord::into_category)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let assets = asset_records
        .into_iter()
        .map(|record| record.into_asset(|row, file| source.resolve_file(row, file)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let catalog = Catalog::assemble(categories, assets)?;
    log::info!(
        "Loaded catalog with {} categories and {} assets",
        catalog.len(),
        catalog.asset_count()
    );

    Ok(catalog)
}
