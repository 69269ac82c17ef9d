//! SQLite game catalog store
//!
//! Each game is one row holding its JSON object; listing follows rowid,
//! i.e. insertion order.

use application::{error::ApplicationError, ports::GameStore};
use async_trait::async_trait;
use chrono::Utc;
use domain::{entities::GameDocument, value_objects::DocumentId};
use serde_json::{Map, Value};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::error::map_sqlx_error;

/// sqlx-backed [`GameStore`]
#[derive(Debug, Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GameRow {
    id: String,
    document: String,
}

impl TryFrom<GameRow> for GameDocument {
    type Error = ApplicationError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let id = DocumentId::parse(&row.id)
            .map_err(|e| ApplicationError::Internal(format!("Invalid game id in database: {e}")))?;
        let fields: Map<String, Value> = serde_json::from_str(&row.document)
            .map_err(|e| ApplicationError::Internal(format!("Corrupt game document {id}: {e}")))?;
        Ok(Self::restore(id, fields))
    }
}

fn encode(game: &GameDocument) -> Result<String, ApplicationError> {
    serde_json::to_string(game.fields())
        .map_err(|e| ApplicationError::Internal(format!("Failed to encode game: {e}")))
}

#[async_trait]
impl GameStore for SqliteGameStore {
    #[instrument(skip(self))]
    async fn list(&self, limit: usize) -> Result<Vec<GameDocument>, ApplicationError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<GameRow> =
            sqlx::query_as("SELECT id, document FROM games ORDER BY rowid LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        debug!(count = rows.len(), "Fetched games");
        rows.into_iter().map(GameDocument::try_from).collect()
    }

    #[instrument(skip(self), fields(game_id = %id))]
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<GameDocument>, ApplicationError> {
        let row: Option<GameRow> = sqlx::query_as("SELECT id, document FROM games WHERE id = $1")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(GameDocument::try_from).transpose()
    }

    #[instrument(skip(self, game), fields(game_id = %game.id()))]
    async fn insert_one(&self, game: &GameDocument) -> Result<(), ApplicationError> {
        sqlx::query("INSERT INTO games (id, document, created_at) VALUES ($1, $2, $3)")
            .bind(game.id().to_string())
            .bind(encode(game)?)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!("Game stored");
        Ok(())
    }

    #[instrument(skip(self, games), fields(count = games.len()))]
    async fn insert_many(&self, games: &[GameDocument]) -> Result<(), ApplicationError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let now = Utc::now().to_rfc3339();

        for game in games {
            sqlx::query("INSERT INTO games (id, document, created_at) VALUES ($1, $2, $3)")
                .bind(game.id().to_string())
                .bind(encode(game)?)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        debug!("Games stored");
        Ok(())
    }
}
