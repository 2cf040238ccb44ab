mod application;
mod domain;
mod infrastructure;
mod interfaces;

pub use crate::application::{StoreDiscountsReport, StoreLookup, StoreProductsReport};
pub use crate::domain::catalog::{Bundle, CatalogReader, Product, Promotion, Store};
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::config::{ProbeConfig, DEFAULT_STORE_ID, DEFAULT_STORE_SLUG};
pub use crate::infrastructure::db::catalog::{run_scoped, CatalogDb, CatalogRepository};
pub use crate::infrastructure::logging::init_tracing;
pub use crate::interfaces::cli;
pub use crate::interfaces::http::{catch_async, ErrorBody, Forwarded};
