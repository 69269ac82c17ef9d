//! Persistence layer - SQLite stores via sqlx

mod database;
mod database_health;
mod error;
mod game_store;
mod user_store;

pub use database::{Database, DatabaseError};
pub use database_health::SqliteDatabaseHealth;
pub use error::map_sqlx_error;
pub use game_store::SqliteGameStore;
pub use user_store::SqliteUserStore;
