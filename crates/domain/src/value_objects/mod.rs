//! Value Objects - Immutable, identity-less domain primitives

mod car_parameters;
mod document_id;
mod geo_location;
mod transport_mode;

pub use car_parameters::CarParameters;
pub use document_id::DocumentId;
pub use geo_location::{EARTH_RADIUS_KM, GeoLocation, InvalidCoordinates};
pub use transport_mode::TransportMode;
