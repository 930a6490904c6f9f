use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::db::DEFAULT_POOL_SIZE;

/// Configuration options for the catalog service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerConfig {
    /// SQLite database path or URL.
    #[validate(length(min = 1))]
    pub database_url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    #[validate(range(min = 1, max = 64))]
    pub pool_size: u32,
}

fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

#[derive(Debug, Error)]
pub enum ServerConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("configuration is invalid: {0}")]
    Validation(#[from] ValidationErrors),
}

impl ServerConfig {
    /// Loads `config/default.yaml` (optional), then `APP_*` variables, then
    /// `DATABASE_URL`.
    pub fn load() -> Result<Self, ServerConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP"))
            .set_override_option("database_url", std::env::var("DATABASE_URL").ok())?
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
