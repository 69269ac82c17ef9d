//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `emission_model`: car emission model artifact
//!
//! Geocoding and footprint settings reuse the config types owned by
//! `integration_geocoding` and `application`.

mod database;
mod emission_model;
mod server;

use std::fmt;

use application::FootprintConfig;
use integration_geocoding::NominatimConfig;
use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use emission_model::EmissionModelConfig;
pub use server::ServerConfig;

/// Prefix for environment variable overrides (e.g. `GAMEAPI_SERVER__PORT`)
pub const ENV_PREFIX: &str = "GAMEAPI";

/// Application environment (development or production)
///
/// Production hides internal error details from HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Nominatim geocoding client settings
    #[serde(default)]
    pub geocoding: NominatimConfig,

    #[serde(default)]
    pub emission_model: EmissionModelConfig,

    /// Footprint request limits and timeouts
    #[serde(default)]
    pub footprint: FootprintConfig,
}

impl AppConfig {
    /// Load configuration from an optional `config.toml` and the environment
    ///
    /// Environment variables use the `GAMEAPI_` prefix and `__` between
    /// nested keys, e.g. `GAMEAPI_FOOTPRINT__MAX_STOPS=50`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file source plus the environment
    pub fn load_from<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        let fail = |msg: &str| Err(config::ConfigError::Message(msg.to_string()));

        if !matches!(
            self.server.log_format.to_lowercase().as_str(),
            "text" | "json"
        ) {
            return fail("server.log_format must be 'text' or 'json'");
        }
        if self.server.max_body_size_json_bytes == 0 {
            return fail("server.max_body_size_json_bytes must be positive");
        }
        if self.database.max_connections == 0 {
            return fail("database.max_connections must be positive");
        }
        if !(self.geocoding.base_url.starts_with("http://")
            || self.geocoding.base_url.starts_with("https://"))
        {
            return fail("geocoding.base_url must be an http(s) URL");
        }
        if self.geocoding.timeout_secs == 0 {
            return fail("geocoding.timeout_secs must be positive");
        }
        if self.footprint.geocoding_timeout_secs == 0 || self.footprint.model_timeout_secs == 0 {
            return fail("footprint timeouts must be positive");
        }
        if self.footprint.max_stops == 0 {
            return fail("footprint.max_stops must be positive");
        }
        Ok(())
    }

    /// Whether internal error details may be returned to clients
    #[must_use]
    pub fn expose_internal_errors(&self) -> bool {
        self.environment != Environment::Production
    }
}
