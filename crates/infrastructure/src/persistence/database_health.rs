//! SQLite database health adapter

use application::ports::DatabaseHealthPort;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{instrument, warn};

/// Runs `SELECT 1` against the shared pool
#[derive(Debug, Clone)]
pub struct SqliteDatabaseHealth {
    pool: SqlitePool,
}

impl SqliteDatabaseHealth {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthPort for SqliteDatabaseHealth {
    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
