//! Entry points shared by the `store-discounts` and `store-products` binaries.
use crate::application::{StoreDiscountsReport, StoreLookup, StoreProductsReport};
use crate::domain::catalog::Product;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ProbeConfig;
use crate::infrastructure::db::catalog::{run_scoped, CatalogDb, CatalogRepository};
use crate::infrastructure::logging::init_tracing;
use std::io::Write;
use std::sync::Arc;
use tracing::{error, info};

/// Loads configuration and installs logging. On a bad config the failure is
/// logged with the default filter and `None` is returned.
pub fn bootstrap(script: &str) -> Option<ProbeConfig> {
    match ProbeConfig::load() {
        Ok(config) => {
            init_tracing(&config.log_filter);
            Some(config)
        }
        Err(err) => {
            init_tracing(&ProbeConfig::default().log_filter);
            report_failure(script, &err);
            None
        }
    }
}

/// Top-level catch: one log line, no retry.
pub fn report_failure(script: &str, err: &AppError) {
    error!(
        script = %script,
        error = %err,
        status_code = err.status_code(),
        is_operational = err.is_operational(),
        location = %err.location(),
        "Script failed"
    );
}

/// Connects with `config` and writes the slug report to `out`. Nothing is
/// written when the connection cannot be opened.
pub async fn run_store_discounts<W: Write>(
    config: &ProbeConfig,
    out: &mut W,
) -> Result<StoreLookup> {
    info!(slug = %config.store_slug, "Looking up store discounts");
    let db = CatalogDb::connect(config).await?;
    store_discounts(db, &config.store_slug, out).await
}

pub async fn run_store_products<W: Write>(
    config: &ProbeConfig,
    out: &mut W,
) -> Result<Vec<Product>> {
    info!(store_id = %config.store_id, "Listing store products");
    let db = CatalogDb::connect(config).await?;
    store_products(db, &config.store_id, out).await
}

/// Slug report over `db`. The handle is closed before returning, on success
/// and on failure alike.
pub async fn store_discounts<W: Write>(
    db: CatalogDb,
    slug: &str,
    out: &mut W,
) -> Result<StoreLookup> {
    run_scoped(db, |db| async move {
        let report = StoreDiscountsReport::new(Arc::new(CatalogRepository::new(&db)));
        report.run(slug, out).await
    })
    .await
}

/// Product report over `db`, closed the same way as [`store_discounts`].
pub async fn store_products<W: Write>(
    db: CatalogDb,
    store_id: &str,
    out: &mut W,
) -> Result<Vec<Product>> {
    run_scoped(db, |db| async move {
        let report = StoreProductsReport::new(Arc::new(CatalogRepository::new(&db)));
        report.run(store_id, out).await
    })
    .await
}
