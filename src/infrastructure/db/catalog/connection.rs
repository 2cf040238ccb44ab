use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ProbeConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Handle to the catalog database.
///
/// Cloning shares the same pool. `close` consumes the handle, and closing any
/// clone closes the pool for all of them.
#[derive(Clone)]
pub struct CatalogDb {
    pool: SqlitePool,
}

impl CatalogDb {
    pub async fn connect(config: &ProbeConfig) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::config(format!("Failed to parse catalog DB URL: {e}")))?
            .read_only(config.read_only)
            .busy_timeout(Duration::from_secs(5))
            .pragma("foreign_keys", "ON");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect catalog DB: {e}")))?;

        debug!(database_url = %config.database_url, "Catalog DB connected");
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    pub async fn close(self) {
        self.pool.close().await;
        debug!("Catalog DB closed");
    }
}

/// Runs one unit of work against `db`, then closes it whatever the outcome.
///
/// The work's result is handed back untouched.
pub async fn run_scoped<F, Fut, T>(db: CatalogDb, work: F) -> Result<T>
where
    F: FnOnce(CatalogDb) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let outcome = work(db.clone()).await;
    db.close().await;
    outcome
}
