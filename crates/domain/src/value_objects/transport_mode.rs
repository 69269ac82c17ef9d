//! Transport modes and their fixed emission factors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A way of travelling along an itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Truck,
    Train,
    Plane,
    Walking,
    Biking,
}

impl TransportMode {
    /// Every mode, in response order
    pub const ALL: [Self; 7] = [
        Self::Car,
        Self::Bus,
        Self::Truck,
        Self::Train,
        Self::Plane,
        Self::Walking,
        Self::Biking,
    ];

    /// Fixed emission factor in grams CO2 equivalent per kilometer
    ///
    /// For [`TransportMode::Car`] this is the default used when no car
    /// parameters are supplied.
    #[must_use]
    pub const fn default_factor(self) -> f64 {
        match self {
            Self::Car => 120.0,
            Self::Bus => 80.0,
            Self::Truck => 160.0,
            Self::Train => 30.0,
            Self::Plane => 150.0,
            Self::Walking | Self::Biking => 10.0,
        }
    }

    /// Lowercase mode name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Truck => "truck",
            Self::Train => "train",
            Self::Plane => "plane",
            Self::Walking => "walking",
            Self::Biking => "biking",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_match_reference_table() {
        assert!((TransportMode::Car.default_factor() - 120.0).abs() < f64::EPSILON);
        assert!((TransportMode::Bus.default_factor() - 80.0).abs() < f64::EPSILON);
        assert!((TransportMode::Truck.default_factor() - 160.0).abs() < f64::EPSILON);
        assert!((TransportMode::Train.default_factor() - 30.0).abs() < f64::EPSILON);
        assert!((TransportMode::Plane.default_factor() - 150.0).abs() < f64::EPSILON);
        assert!((TransportMode::Walking.default_factor() - 10.0).abs() < f64::EPSILON);
        assert!((TransportMode::Biking.default_factor() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_contains_seven_distinct_modes() {
        let mut names: Vec<_> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&TransportMode::Walking).unwrap();
        assert_eq!(json, "\"walking\"");
    }
}
