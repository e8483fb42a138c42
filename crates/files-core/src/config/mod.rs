//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! optional TOML files and environment variables. Each sub-module represents
//! a logical configuration section, and every section has defaults so the
//! server can start without any file present.

pub mod app;
pub mod auth;
pub mod cache;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::cache::CacheConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Prefix for structured environment overrides (`FILES__SERVER__PORT=...`).
const ENV_PREFIX: &str = "FILES";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Metadata store connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Session token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `FILES__*` variables, and finally the legacy
    /// variables `FOLDER_PATH`, `DB_HOST`, `DB_PORT`, `DB_DATABASE` and `PORT`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("storage.root_path", std::env::var("FOLDER_PATH").ok())?
            .set_override_option("database.host", std::env::var("DB_HOST").ok())?
            .set_override_option("database.port", env_int("DB_PORT"))?
            .set_override_option("database.database", std::env::var("DB_DATABASE").ok())?
            .set_override_option("server.port", env_int("PORT"))?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn env_int(name: &str) -> Option<i64> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
