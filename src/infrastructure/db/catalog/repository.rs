use crate::domain::catalog::{Bundle, CatalogReader, Product, Promotion, Store};
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;

use super::connection::CatalogDb;

pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    pub fn new(db: &CatalogDb) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl CatalogReader for CatalogRepository {
    async fn find_store_by_slug(&self, slug: &str) -> Result<Option<Store>> {
        let store = sqlx::query_as::<_, StoreEntity>(
            "SELECT id, slug, name FROM stores WHERE slug = ? LIMIT 1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch store: {e}")))?;

        Ok(store.map(Into::into))
    }

    async fn find_promotions_by_store(&self, store_id: &str) -> Result<Vec<Promotion>> {
        let rows = sqlx::query_as::<_, PromotionEntity>(
            "SELECT id, store_id, name, is_active FROM promotions WHERE store_id = ? ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list promotions: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_bundles_by_store(&self, store_id: &str) -> Result<Vec<Bundle>> {
        let rows = sqlx::query_as::<_, BundleEntity>(
            "SELECT id, store_id, name, price_cents FROM bundles WHERE store_id = ? ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list bundles: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_products_by_store(&self, store_id: &str) -> Result<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, store_id, name, price_cents FROM products WHERE store_id = ? ORDER BY id",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list products: {e}")))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(sqlx::FromRow)]
struct StoreEntity {
    id: String,
    slug: String,
    name: String,
}

impl From<StoreEntity> for Store {
    fn from(entity: StoreEntity) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PromotionEntity {
    id: String,
    store_id: String,
    name: String,
    is_active: i64,
}

impl From<PromotionEntity> for Promotion {
    fn from(entity: PromotionEntity) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            name: entity.name,
            is_active: entity.is_active != 0,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BundleEntity {
    id: String,
    store_id: String,
    name: String,
    price_cents: i64,
}

impl From<BundleEntity> for Bundle {
    fn from(entity: BundleEntity) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            name: entity.name,
            price_cents: entity.price_cents,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProductEntity {
    id: String,
    store_id: String,
    name: String,
    price_cents: i64,
}

impl From<ProductEntity> for Product {
    fn from(entity: ProductEntity) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            name: entity.name,
            price_cents: entity.price_cents,
        }
    }
}
