use crate::domain::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Top-level tenant. `slug` is unique across stores.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub price_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub price_cents: i64,
}

/// Read-only lookups against the catalog store.
///
/// Collections are filtered by equality on the store reference and come back
/// ordered by id. An unknown store id is not an error, it yields an empty list.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn find_store_by_slug(&self, slug: &str) -> Result<Option<Store>>;
    async fn find_promotions_by_store(&self, store_id: &str) -> Result<Vec<Promotion>>;
    async fn find_bundles_by_store(&self, store_id: &str) -> Result<Vec<Bundle>>;
    async fn find_products_by_store(&self, store_id: &str) -> Result<Vec<Product>>;
}
