use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_SLUG: &str = "demo-store";
pub const DEFAULT_STORE_ID: &str = "store_demo_0001";

const CONFIG_FILE: &str = "probe.toml";
const ENV_PREFIX: &str = "PROBE_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeConfig {
    pub database_url: String,
    pub log_filter: String,
    pub store_slug: String,
    pub store_id: String,
    pub max_connections: u32,
    pub read_only: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://catalog.db".to_string(),
            log_filter: "info".to_string(),
            store_slug: DEFAULT_STORE_SLUG.to_string(),
            store_id: DEFAULT_STORE_ID.to_string(),
            max_connections: 1,
            read_only: true,
        }
    }
}

impl ProbeConfig {
    /// Defaults, then `probe.toml`, then `PROBE_*` variables (a `.env` file is
    /// loaded into the environment first when present).
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config: ProbeConfig = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ProbeConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn validate(&self) -> Result<()> {
        if self.database_url.trim().is_empty() {
            return Err(AppError::config("database_url must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(AppError::config("max_connections must be at least 1"));
        }
        Ok(())
    }
}
