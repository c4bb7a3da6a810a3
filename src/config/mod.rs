//! Application configuration module
//!
//! Configuration is read from environment variables with the `PERSONAL_API`
//! prefix; nested values are separated by double underscores. A `.env` file
//! is loaded first when present.
//!
//! # Example
//!
//! ```no_run
//! use personal_api::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Access-code grants and lookup deadline
    #[serde(default)]
    pub auth: AuthConfig,

    /// PostgreSQL mood store. In-memory storage when absent.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `PERSONAL_API__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PERSONAL_API__AUTH__GRANTS_PATH=grants.yaml` -> `auth.grants_path`
    /// - `PERSONAL_API__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PERSONAL_API")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
