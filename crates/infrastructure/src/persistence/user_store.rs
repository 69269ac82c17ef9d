//! SQLite user store

use application::{error::ApplicationError, ports::UserStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{entities::User, value_objects::DocumentId};
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use super::error::map_sqlx_error;

/// sqlx-backed [`UserStore`]
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
    token: String,
    likes: String,
    created_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = ApplicationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let id = DocumentId::parse(&row.id)
            .map_err(|e| ApplicationError::Internal(format!("Invalid user id in database: {e}")))?;
        let likes: Vec<String> = serde_json::from_str(&row.likes)
            .map_err(|e| ApplicationError::Internal(format!("Corrupt likes for user {id}: {e}")))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc));

        Ok(Self {
            id,
            username: row.username,
            password_hash: row.password_hash,
            token: row.token,
            likes,
            created_at,
        })
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApplicationError> {
        let row: Option<UserRow> = sqlx::query_as(
            r"
            SELECT id, username, password_hash, token, likes, created_at
            FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!(found = row.is_some(), "Looked up user");
        row.map(User::try_from).transpose()
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: &User) -> Result<(), ApplicationError> {
        let likes = serde_json::to_string(&user.likes)
            .map_err(|e| ApplicationError::Internal(format!("Failed to encode likes: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO users (id, username, password_hash, token, likes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.token)
        .bind(likes)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            ApplicationError::InvalidOperation(_) => {
                ApplicationError::InvalidOperation("User already registered".to_string())
            }
            other => other,
        })?;

        debug!("User stored");
        Ok(())
    }
}
