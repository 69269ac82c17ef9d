//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod database_health_port;
mod emission_model_port;
mod game_store;
mod geocoding_port;
mod password_hasher_port;
mod user_store;

pub use database_health_port::DatabaseHealthPort;
#[cfg(test)]
pub use database_health_port::MockDatabaseHealthPort;
pub use emission_model_port::EmissionModelPort;
#[cfg(test)]
pub use emission_model_port::MockEmissionModelPort;
pub use game_store::GameStore;
#[cfg(test)]
pub use game_store::MockGameStore;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use password_hasher_port::PasswordHasherPort;
#[cfg(test)]
pub use password_hasher_port::MockPasswordHasherPort;
pub use user_store::UserStore;
#[cfg(test)]
pub use user_store::MockUserStore;
