//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: Nominatim geocoding,
//! the linear emission model, Argon2 password hashing and the SQLite stores.
//! Also owns configuration loading.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::*;
pub use config::{
    AppConfig, DatabaseConfig, EmissionModelConfig, Environment, ServerConfig,
};
pub use persistence::{
    Database, DatabaseError, SqliteDatabaseHealth, SqliteGameStore, SqliteUserStore,
};
