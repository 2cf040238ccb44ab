use crate::domain::catalog::{Bundle, CatalogReader, Product, Promotion, Store};
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory `CatalogReader` that records each call it receives.
#[derive(Default)]
pub(crate) struct RecordingCatalog {
    pub stores: Vec<Store>,
    pub promotions: Vec<Promotion>,
    pub bundles: Vec<Bundle>,
    pub products: Vec<Product>,
    pub fail_on: Option<&'static str>,
    pub log: Mutex<Vec<String>>,
}

impl RecordingCatalog {
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, arg: &str) -> Result<()> {
        self.log.lock().unwrap().push(format!("{call}({arg})"));
        if self.fail_on == Some(call) {
            return Err(AppError::database("connection refused"));
        }
        Ok(())
    }
}

pub(crate) fn store(id: &str, slug: &str) -> Store {
    Store {
        id: id.to_string(),
        slug: slug.to_string(),
        name: format!("Store {id}"),
    }
}

pub(crate) fn promotion(id: &str, store_id: &str) -> Promotion {
    Promotion {
        id: id.to_string(),
        store_id: store_id.to_string(),
        name: format!("Promotion {id}"),
        is_active: true,
    }
}

pub(crate) fn bundle(id: &str, store_id: &str) -> Bundle {
    Bundle {
        id: id.to_string(),
        store_id: store_id.to_string(),
        name: format!("Bundle {id}"),
        price_cents: 1000,
    }
}

pub(crate) fn product(id: &str, store_id: &str) -> Product {
    Product {
        id: id.to_string(),
        store_id: store_id.to_string(),
        name: format!("Product {id}"),
        price_cents: 500,
    }
}

#[async_trait]
impl CatalogReader for RecordingCatalog {
    async fn find_store_by_slug(&self, slug: &str) -> Result<Option<Store>> {
        self.record("find_store_by_slug", slug)?;
        Ok(self.stores.iter().find(|s| s.slug == slug).cloned())
    }

    async fn find_promotions_by_store(&self, store_id: &str) -> Result<Vec<Promotion>> {
        self.record("find_promotions_by_store", store_id)?;
        Ok(self
            .promotions
            .iter()
            .filter(|p| p.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn find_bundles_by_store(&self, store_id: &str) -> Result<Vec<Bundle>> {
        self.record("find_bundles_by_store", store_id)?;
        Ok(self
            .bundles
            .iter()
            .filter(|b| b.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn find_products_by_store(&self, store_id: &str) -> Result<Vec<Product>> {
        self.record("find_products_by_store", store_id)?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.store_id == store_id)
            .cloned()
            .collect())
    }
}
