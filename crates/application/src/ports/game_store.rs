//! Game catalog storage port

use async_trait::async_trait;
use domain::{entities::GameDocument, value_objects::DocumentId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for game document persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GameStore: Send + Sync {
    /// First `limit` games in insertion order
    async fn list(&self, limit: usize) -> Result<Vec<GameDocument>, ApplicationError>;

    /// Look up a game by identifier
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<GameDocument>, ApplicationError>;

    /// Store a single game
    async fn insert_one(&self, game: &GameDocument) -> Result<(), ApplicationError>;

    /// Store several games atomically
    async fn insert_many(&self, games: &[GameDocument]) -> Result<(), ApplicationError>;
}
