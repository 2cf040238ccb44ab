use crate::application::use_cases::report::{
    write_block, write_not_found, BUNDLES_LABEL, PROMOTIONS_LABEL,
};
use crate::domain::catalog::{Bundle, CatalogReader, Promotion, Store};
use crate::domain::error::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Outcome of a slug lookup. A missing store is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreLookup {
    NotFound,
    Found {
        store: Store,
        promotions: Vec<Promotion>,
        bundles: Vec<Bundle>,
    },
}

pub struct StoreDiscountsReport {
    reader: Arc<dyn CatalogReader>,
}

impl StoreDiscountsReport {
    pub fn new(reader: Arc<dyn CatalogReader>) -> Self {
        Self { reader }
    }

    /// Looks the store up by slug, then lists its promotions and bundles.
    ///
    /// Queries run one after another: store, promotions, bundles. When the
    /// store is missing nothing else is queried.
    pub async fn run<W: Write>(&self, slug: &str, out: &mut W) -> Result<StoreLookup> {
        let Some(store) = self.reader.find_store_by_slug(slug).await? else {
            info!(slug = %slug, "Store not found");
            write_not_found(out)?;
            return Ok(StoreLookup::NotFound);
        };

        let promotions = self.reader.find_promotions_by_store(&store.id).await?;
        let bundles = self.reader.find_bundles_by_store(&store.id).await?;

        info!(
            store_id = %store.id,
            promotions = promotions.len(),
            bundles = bundles.len(),
            "Store discounts fetched"
        );

        write_block(out, PROMOTIONS_LABEL, &promotions)?;
        write_block(out, BUNDLES_LABEL, &bundles)?;

        Ok(StoreLookup::Found {
            store,
            promotions,
            bundles,
        })
    }
}
