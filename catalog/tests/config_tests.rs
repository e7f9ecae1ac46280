use std::path::PathBuf;

use catalog::{CatalogConfig, SourceConfig};
use serial_test::serial;

fn shipped_config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/config/catalog.toml")
}

#[test]
fn test_load_shipped_config() {
    let config = CatalogConfig::load_from_file(shipped_config_path()).expect("Failed to load config");

    assert_eq!(
        config.source,
        SourceConfig::File {
            path: PathBuf::from("catalog/config/sample_catalog.json")
        }
    );
}

#[test]
fn test_invalid_config_path() {
    let result = CatalogConfig::load_from_file("nonexistent/catalog.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_env_file_override() {
    std::env::remove_var("CATALOG_BASE_URL");
    std::env::set_var("CATALOG_FILE", "/tmp/catalog.json");

    let config = CatalogConfig::default().with_env_overrides();
    std::env::remove_var("CATALOG_FILE");

    assert_eq!(
        config.source,
        SourceConfig::File {
            path: PathBuf::from("/tmp/catalog.json")
        }
    );
}

#[test]
#[serial]
fn test_env_base_url_override() {
    std::env::remove_var("CATALOG_FILE");
    std::env::set_var("CATALOG_BASE_URL", "https://assets.example.com");

    let config = CatalogConfig::load_from_file(shipped_config_path())
        .expect("Failed to load config")
        .with_env_overrides();
    std::env::remove_var("CATALOG_BASE_URL");

    match config.source {
        SourceConfig::Pocketbase(backend) => {
            assert_eq!(backend.base_url, "https://assets.example.com");
            assert_eq!(backend.categories_collection, "CustomizationGroups");
        }
        other => panic!("expected pocketbase source, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_no_env_keeps_config() {
    std::env::remove_var("CATALOG_FILE");
    std::env::remove_var("CATALOG_BASE_URL");

    let config = CatalogConfig::default();
    assert_eq!(config.clone().with_env_overrides(), config);
}
