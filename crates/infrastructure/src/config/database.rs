//! Database (SQLite) configuration.

use serde::{Deserialize, Serialize};

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (e.g. "sqlite:gameapi.db" or "sqlite::memory:")
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum number of concurrent database connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Whether to run pending migrations on startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_url() -> String {
    "sqlite:gameapi.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

const fn default_true() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
            run_migrations: true,
        }
    }
}

impl DatabaseConfig {
    /// Whether the URL points at a transient in-memory database
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}
