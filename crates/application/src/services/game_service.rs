//! Game catalog use cases

use std::sync::Arc;

use domain::{entities::GameDocument, value_objects::DocumentId};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::GameStore};

/// Number of games returned by a listing
pub const GAME_PAGE_SIZE: usize = 10;

const NOT_FOUND: &str = "No game with that id";
const ADD_FAILED: &str = "Failed to add game";
const INSERT_MANY_FAILED: &str = "Failed to insert games";

/// Listing, lookup and insertion of games
pub struct GameService {
    store: Arc<dyn GameStore>,
}

impl std::fmt::Debug for GameService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameService").finish_non_exhaustive()
    }
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// First page of games, projected to their summary fields
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Value>, ApplicationError> {
        let games = self.store.list(GAME_PAGE_SIZE).await?;
        debug!(count = games.len(), "Listed games");
        Ok(games.iter().map(GameDocument::summary).collect())
    }

    /// Full game document by identifier
    ///
    /// Ids that do not parse are reported exactly like missing games.
    #[instrument(skip(self))]
    pub async fn get(&self, raw_id: &str) -> Result<Value, ApplicationError> {
        let Ok(id) = DocumentId::parse(raw_id) else {
            debug!("Game id is not a valid identifier");
            return Err(ApplicationError::NotFound(NOT_FOUND.to_string()));
        };

        self.store
            .find_by_id(&id)
            .await?
            .map(GameDocument::into_json)
            .ok_or_else(|| ApplicationError::NotFound(NOT_FOUND.to_string()))
    }

    /// Store one game
    #[instrument(skip(self, value))]
    pub async fn add(&self, value: Value) -> Result<DocumentId, ApplicationError> {
        let game = GameDocument::from_value(value).map_err(|e| {
            warn!(error = %e, "Rejected game document");
            ApplicationError::InvalidOperation(ADD_FAILED.to_string())
        })?;

        self.store.insert_one(&game).await?;
        debug!(id = %game.id(), "Game added");
        Ok(game.id())
    }

    /// Store a non-empty array of games, all or nothing
    #[instrument(skip(self, value))]
    pub async fn add_many(&self, value: Value) -> Result<Vec<DocumentId>, ApplicationError> {
        let reject = |reason: String| {
            warn!(reason = %reason, "Rejected game batch");
            ApplicationError::InvalidOperation(INSERT_MANY_FAILED.to_string())
        };

        let Value::Array(items) = value else {
            return Err(reject("body is not an array".to_string()));
        };
        if items.is_empty() {
            return Err(reject("empty batch".to_string()));
        }

        let games = items
            .into_iter()
            .map(GameDocument::from_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| reject(e.to_string()))?;

        self.store.insert_many(&games).await?;
        debug!(count = games.len(), "Games added");
        Ok(games.iter().map(GameDocument::id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockGameStore;
    use serde_json::json;

    fn game(title: &str) -> GameDocument {
        GameDocument::from_value(json!({ "Title": title, "Summary": "long" })).unwrap()
    }

    #[tokio::test]
    async fn list_requests_one_page_and_projects() {
        let mut store = MockGameStore::new();
        store
            .expect_list()
            .withf(|limit| *limit == GAME_PAGE_SIZE)
            .returning(|_| Ok(vec![game("Doom"), game("Quake")]));

        let games = GameService::new(Arc::new(store)).list().await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0]["Title"], json!("Doom"));
        assert!(games[0].get("Summary").is_none());
        assert!(games[0].get("_id").is_some());
    }

    #[tokio::test]
    async fn get_returns_full_document() {
        let stored = game("Doom");
        let id = stored.id();
        let mut store = MockGameStore::new();
        store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let doc = GameService::new(Arc::new(store))
            .get(&format!(" {id} "))
            .await
            .unwrap();
        assert_eq!(doc["_id"], json!(id.to_string()));
        assert_eq!(doc["Summary"], json!("long"));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let mut store = MockGameStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let err = GameService::new(Arc::new(store))
            .get(&DocumentId::new().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(ref m) if m == "No game with that id"));
    }

    #[tokio::test]
    async fn get_invalid_id_is_not_found_without_lookup() {
        let mut store = MockGameStore::new();
        store.expect_find_by_id().never();

        let err = GameService::new(Arc::new(store))
            .get("not-an-id")
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn add_rejects_non_object() {
        let mut store = MockGameStore::new();
        store.expect_insert_one().never();

        let err = GameService::new(Arc::new(store))
            .add(json!([1, 2]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidOperation(ref m) if m == "Failed to add game"));
    }

    #[tokio::test]
    async fn add_stores_object() {
        let mut store = MockGameStore::new();
        store.expect_insert_one().times(1).returning(|_| Ok(()));

        let id = GameService::new(Arc::new(store))
            .add(json!({"Title": "Doom"}))
            .await;
        assert!(id.is_ok());
    }

    #[tokio::test]
    async fn add_many_returns_ids_in_order() {
        let mut store = MockGameStore::new();
        store
            .expect_insert_many()
            .withf(|games| games.len() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let ids = GameService::new(Arc::new(store))
            .add_many(json!([{"Title": "A"}, {"Title": "B"}]))
            .await
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[tokio::test]
    async fn add_many_rejects_bad_batches() {
        for body in [json!([]), json!([{"Title": "A"}, 3]), json!({"Title": "A"})] {
            let mut store = MockGameStore::new();
            store.expect_insert_many().never();

            let err = GameService::new(Arc::new(store))
                .add_many(body)
                .await
                .unwrap_err();
            assert!(
                matches!(err, ApplicationError::InvalidOperation(ref m) if m == "Failed to insert games")
            );
        }
    }
}
