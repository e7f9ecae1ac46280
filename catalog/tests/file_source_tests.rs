use std::io::Write;

use catalog::{load_catalog, CatalogLoadError, CatalogSource, FileSource};
use common::CatalogError;

fn sample_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/config/sample_catalog.json")
}

fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write snapshot");
    file
}

#[tokio::test]
async fn test_sample_catalog_loads_in_position_order() {
    let catalog = load_catalog(&FileSource::new(sample_path()))
        .await
        .expect("sample catalog loads");

    let names: Vec<&str> = catalog
        .categories()
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, ["Head", "Hair", "Hat", "Eyes", "Top"]);
    assert_eq!(catalog.asset_count(), 8);
}

#[tokio::test]
async fn test_assets_are_newest_first_within_category() {
    let catalog = load_catalog(&FileSource::new(sample_path()))
        .await
        .expect("sample catalog loads");

    let hair = catalog.category_by_name("Hair").expect("hair");
    let assets: Vec<&str> = hair.assets.iter().map(|asset| asset.name.as_str()).collect();
    assert_eq!(assets, ["Long", "Bob"]);
}

#[tokio::test]
async fn test_file_refs_resolve_next_to_snapshot() {
    let catalog = load_catalog(&FileSource::new(sample_path()))
        .await
        .expect("sample catalog loads");

    let cap = catalog.asset(&"ast_hat_cap".into()).expect("cap");
    let expected = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("models/hat_cap.glb");
    assert_eq!(cap.model, expected.to_string_lossy());
}

#[tokio::test]
async fn test_fetch_assets_sorts_by_created_descending() {
    let file = write_snapshot(
        r#"{"categories": [{"id": "g", "name": "G"}],
            "assets": [
              {"id": "old", "group": "g", "name": "Old", "created": "2024-01-01 00:00:00.000Z"},
              {"id": "new", "group": "g", "name": "New", "created": "2024-06-01 00:00:00.000Z"}
            ]}"#,
    );

    let assets = FileSource::new(file.path())
        .fetch_assets()
        .await
        .expect("assets");
    let ids: Vec<&str> = assets.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, ["new", "old"]);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let result = load_catalog(&FileSource::new("does/not/exist.json")).await;
    assert!(matches!(result, Err(CatalogLoadError::Io { .. })));
}

#[tokio::test]
async fn test_malformed_document_is_decode_error() {
    let file = write_snapshot("{ not json");
    let result = load_catalog(&FileSource::new(file.path())).await;
    assert!(matches!(result, Err(CatalogLoadError::Decode(_))));
}

#[tokio::test]
async fn test_self_locking_asset_is_rejected() {
    let file = write_snapshot(
        r#"{"categories": [{"id": "hat", "name": "Hat", "removable": true}],
            "assets": [{"id": "cap", "group": "hat", "name": "Cap", "lockedGroups": ["hat"]}]}"#,
    );

    let result = load_catalog(&FileSource::new(file.path())).await;
    assert!(matches!(
        result,
        Err(CatalogLoadError::Catalog(CatalogError::SelfLock { .. }))
    ));
}

#[tokio::test]
async fn test_one_snapshot_serves_both_collections() {
    let file = write_snapshot(
        r#"{"categories": [{"id": "g", "name": "G"}],
            "assets": [{"id": "first", "group": "g", "name": "First"}]}"#,
    );
    let source = FileSource::new(file.path());

    let categories = source.fetch_categories().await.expect("categories");
    std::fs::write(
        file.path(),
        r#"{"categories": [{"id": "h", "name": "H"}],
            "assets": [{"id": "second", "group": "h", "name": "Second"}]}"#,
    )
    .expect("rewrite snapshot");
    let assets = source.fetch_assets().await.expect("assets");

    assert_eq!(categories[0].id, "g");
    assert_eq!(assets[0].id, "first");

    let reloaded = FileSource::new(file.path())
        .fetch_assets()
        .await
        .expect("assets");
    assert_eq!(reloaded[0].id, "second");
}
