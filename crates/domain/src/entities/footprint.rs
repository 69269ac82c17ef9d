//! Footprint result and distance accumulation

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, TransportMode};

/// Sum of great-circle distances over consecutive pairs, in kilometers
///
/// Zero for fewer than two locations.
pub fn total_distance_km(locations: &[GeoLocation]) -> f64 {
    locations
        .windows(2)
        .map(|pair| pair[0].distance_km(&pair[1]))
        .sum()
}

/// Grams CO2 equivalent per transport mode over a whole itinerary
///
/// Every mode is always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub car_footprint: f64,
    pub bus_footprint: f64,
    pub truck_footprint: f64,
    pub train_footprint: f64,
    pub plane_footprint: f64,
    pub walking_footprint: f64,
    pub biking_footprint: f64,
}

impl FootprintResult {
    /// All-zero result
    pub const fn zero() -> Self {
        Self {
            car_footprint: 0.0,
            bus_footprint: 0.0,
            truck_footprint: 0.0,
            train_footprint: 0.0,
            plane_footprint: 0.0,
            walking_footprint: 0.0,
            biking_footprint: 0.0,
        }
    }

    /// Apply per-mode factors to a total distance
    ///
    /// `car_factor` replaces the default car factor; every other mode uses
    /// [`TransportMode::default_factor`].
    pub fn from_distance(total_km: f64, car_factor: f64) -> Self {
        let of = |mode: TransportMode| total_km * mode.default_factor();
        Self {
            car_footprint: total_km * car_factor,
            bus_footprint: of(TransportMode::Bus),
            truck_footprint: of(TransportMode::Truck),
            train_footprint: of(TransportMode::Train),
            plane_footprint: of(TransportMode::Plane),
            walking_footprint: of(TransportMode::Walking),
            biking_footprint: of(TransportMode::Biking),
        }
    }

    /// Footprint for a single mode
    pub const fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => self.car_footprint,
            TransportMode::Bus => self.bus_footprint,
            TransportMode::Truck => self.truck_footprint,
            TransportMode::Train => self.train_footprint,
            TransportMode::Plane => self.plane_footprint,
            TransportMode::Walking => self.walking_footprint,
            TransportMode::Biking => self.biking_footprint,
        }
    }
}

impl Default for FootprintResult {
    fn default() -> Self {
        Self::zero()
    }
}
