//! Itinerary entity
//!
//! An ordered list of stops. Each stop is classified exactly once, when the
//! itinerary is built from raw request fields, into either an explicit
//! coordinate or an address that still needs resolving.

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::GeoLocation};

/// Raw stop fields as supplied by a caller
///
/// Any combination of fields may be present; [`ItineraryStop::from_fields`]
/// decides which one is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopFields {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
}

impl StopFields {
    /// Stop with an explicit coordinate pair
    pub const fn coordinates(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
            address: None,
        }
    }

    /// Stop with only an address
    pub fn address(address: impl Into<String>) -> Self {
        Self {
            lat: None,
            lng: None,
            address: Some(address.into()),
        }
    }
}

/// A classified itinerary stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItineraryStop {
    /// Already resolved coordinate
    Coordinates(GeoLocation),
    /// Free-text place name to geocode
    Address(String),
}

impl ItineraryStop {
    /// Classify raw stop fields
    ///
    /// A valid `lat`/`lng` pair wins. Otherwise a non-blank address is used
    /// (trimmed). A stop with neither is rejected with
    /// [`DomainError::MalformedStop`] carrying its 0-based `position`.
    pub fn from_fields(position: usize, fields: StopFields) -> Result<Self, DomainError> {
        let coordinate = match (fields.lat, fields.lng) {
            (Some(lat), Some(lng)) => GeoLocation::new(lat, lng).ok(),
            _ => None,
        };
        if let Some(location) = coordinate {
            return Ok(Self::Coordinates(location));
        }

        if let Some(address) = fields
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
        {
            return Ok(Self::Address(address.to_string()));
        }

        let reason = match (fields.lat, fields.lng) {
            (Some(_), Some(_)) => "coordinates out of range and no address given",
            (Some(_), None) | (None, Some(_)) => "incomplete coordinate pair and no address given",
            (None, None) => "neither coordinates nor address given",
        };
        Err(DomainError::malformed_stop(position, reason))
    }

    /// Whether this stop needs the geocoder
    pub const fn needs_resolution(&self) -> bool {
        matches!(self, Self::Address(_))
    }
}

/// Ordered sequence of classified stops
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    stops: Vec<ItineraryStop>,
}

impl Itinerary {
    /// Classify every raw stop, failing on the first malformed one
    pub fn from_fields(fields: impl IntoIterator<Item = StopFields>) -> Result<Self, DomainError> {
        let stops = fields
            .into_iter()
            .enumerate()
            .map(|(position, f)| ItineraryStop::from_fields(position, f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ItineraryStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of stops that need geocoding
    pub fn unresolved_count(&self) -> usize {
        self.stops.iter().filter(|s| s.needs_resolution()).count()
    }
}
