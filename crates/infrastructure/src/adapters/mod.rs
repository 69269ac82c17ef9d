//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod geocoding_adapter;
mod linear_emission_model;
mod password_hasher;

pub use geocoding_adapter::GeocodingAdapter;
pub use linear_emission_model::{EmissionModelError, LinearEmissionModel};
pub use password_hasher::Argon2PasswordHasher;
