use serde::de::DeserializeOwned;

use protocol::{AssetRecord, CategoryRecord, ListPage};

use super::CatalogSource;
use crate::config::PocketBaseConfig;
use crate::error::{CatalogLoadError, Result};

const CATEGORY_SORT: &str = "position";
const ASSET_SORT: &str = "-created";

/// Reads the catalog collections from a PocketBase-style REST backend.
#[derive(Debug, Clone)]
pub struct PocketBaseSource {
    client: reqwest::Client,
    base_url: String,
    categories_collection: String,
    assets_collection: String,
    page_size: u32,
}

impl PocketBaseSource {
    pub fn new(config: &PocketBaseConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            categories_collection: config.categories_collection.clone(),
            assets_collection: config.assets_collection.clone(),
            page_size: config.page_size.max(1),
        })
    }

    pub fn records_url(&self, collection: &str, page: u32, sort: &str) -> String {
        format!(
            "{}/api/collections/{}/records?page={}&perPage={}&sort={}",
            self.base_url, collection, page, self.page_size, sort
        )
    }

    pub fn file_url(&self, collection_id: &str, record_id: &str, file_name: &str) -> String {
        format!(
            "{}/api/files/{}/{}/{}",
            self.base_url, collection_id, record_id, file_name
        )
    }

    async fn list_all<T>(&self, collection: &str, sort: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let url = self.records_url(collection, page, sort);
            log::debug!("GET {}", url);

            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(CatalogLoadError::Status { url, status });
            }

            let body: ListPage<T> = response.json().await?;
            let last = body.is_last();
            items.extend(body.items);
            if last {
                break;
            }
            page += 1;
        }

        log::debug!("Collection {} returned {} records", collection, items.len());
        Ok(items)
    }
}

impl CatalogSource for PocketBaseSource {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>> {
        self.list_all(&self.categories_collection, CATEGORY_SORT)
            .await
    }

    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>> {
        self.list_all(&self.assets_collection, ASSET_SORT).await
    }

    fn resolve_file(&self, record: &AssetRecord, file_name: &str) -> String {
        if file_name.is_empty() {
            return String::new();
        }
        let collection = if record.collection_id.is_empty() {
            self.assets_collection.as_str()
        } else {
            record.collection_id.as_str()
        };
        self.file_url(collection, &record.id, file_name)
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> PocketBaseSource {
        let mut config = PocketBaseConfig::new("https://catalog.example.com/");
        config.page_size = 25;
        PocketBaseSource::new(&config).unwrap()
    }

    fn record(collection_id: &str) -> AssetRecord {
        AssetRecord {
            id: "a1".into(),
            collection_id: collection_id.into(),
            group: "g1".into(),
            name: "Cap".into(),
            thumbnail: "cap.png".into(),
            file: "cap.glb".into(),
            locked_groups: None,
            created: String::new(),
        }
    }

    #[test]
    fn test_records_url() {
        assert_eq!(
            source().records_url("CustomizationGroups", 2, CATEGORY_SORT),
            "https://catalog.example.com/api/collections/CustomizationGroups/records?page=2&perPage=25&sort=position"
        );
    }

    #[test]
    fn test_file_refs_use_record_collection() {
        let source = source();
        assert_eq!(
            source.resolve_file(&record("pbc_123"), "cap.glb"),
            "https://catalog.example.com/api/files/pbc_123/a1/cap.glb"
        );
        assert_eq!(
            source.resolve_file(&record(""), "cap.png"),
            "https://catalog.example.com/api/files/CustomizationAssets/a1/cap.png"
        );
        assert_eq!(source.resolve_file(&record("pbc_123"), ""), "");
    }

    #[test]
    fn test_describe_is_base_url() {
        assert_eq!(source().describe(), "https://catalog.example.com");
    }
}
