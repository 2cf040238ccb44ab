use crate::application::use_cases::report::{write_block, PRODUCTS_LABEL};
use crate::domain::catalog::{CatalogReader, Product};
use crate::domain::error::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

pub struct StoreProductsReport {
    reader: Arc<dyn CatalogReader>,
}

impl StoreProductsReport {
    pub fn new(reader: Arc<dyn CatalogReader>) -> Self {
        Self { reader }
    }

    /// Lists the products whose store reference equals `store_id`.
    ///
    /// The store itself is not looked up, so an unknown id prints an empty list.
    pub async fn run<W: Write>(&self, store_id: &str, out: &mut W) -> Result<Vec<Product>> {
        let products = self.reader.find_products_by_store(store_id).await?;
        info!(store_id = %store_id, products = products.len(), "Store products fetched");

        write_block(out, PRODUCTS_LABEL, &products)?;
        Ok(products)
    }
}
