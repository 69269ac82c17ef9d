//! Domain layer for GameAPI
//!
//! Contains the itinerary and footprint model, catalog and user entities,
//! value objects, and domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
