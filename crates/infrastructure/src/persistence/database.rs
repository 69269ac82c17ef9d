//! Async SQLite connection pool using sqlx
//!
//! All stores share this pool. Schema changes live as SQL files in the
//! workspace `migrations/` directory and are applied with `sqlx::migrate!()`.

use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use tracing::{debug, info, instrument};

use crate::config::DatabaseConfig;

/// Error type for database setup
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Shared SQLite connection pool
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database described by `config`
    #[instrument(skip_all, fields(url = %config.url))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let in_memory = config.is_in_memory();
        let mut options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(5));
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // every in-memory connection is a separate database, so keep exactly one
        let max_connections = if in_memory { 1 } else { config.max_connections };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        info!(max_connections, "Database pool created");
        Ok(Self { pool })
    }

    /// Fresh migrated in-memory database
    pub async fn in_memory() -> Result<Self, DatabaseError> {
        let db = Self::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        })
        .await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Get the underlying pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply pending migrations
    #[instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Close all connections in the pool
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("Database pool closed");
    }
}
