//! Address geocoding for GameAPI
//!
//! Resolves free-text place names to coordinates through the
//! [Nominatim](https://nominatim.openstreetmap.org) search API.
//!
//! [`GeocodingClient`] is the client interface, implemented by
//! [`NominatimGeocodingClient`], which rate-limits outgoing requests and
//! caches successful lookups.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
//!
//! let client = NominatimGeocodingClient::new(&NominatimConfig::default())?;
//! let eiffel = client.geocode("Eiffel Tower, Paris").await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{GeocodingClient, NominatimGeocodingClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
