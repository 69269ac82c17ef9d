//! Property-based tests for distance accumulation and footprint scaling

use domain::{
    entities::{FootprintResult, total_distance_km},
    value_objects::{GeoLocation, TransportMode},
};
use proptest::prelude::*;

fn location() -> impl Strategy<Value = GeoLocation> {
    (-90.0f64..=90.0f64, -180.0f64..=180.0f64)
        .prop_map(|(lat, lon)| GeoLocation::new(lat, lon).unwrap())
}

mod distance_tests {
    use super::*;

    proptest! {
        #[test]
        fn distance_to_self_is_zero(loc in location()) {
            prop_assert_eq!(loc.distance_km(&loc), 0.0);
        }

        #[test]
        fn distance_is_symmetric(a in location(), b in location()) {
            let d1 = a.distance_km(&b);
            let d2 = b.distance_km(&a);
            prop_assert!((d1 - d2).abs() < 1e-6);
        }

        #[test]
        fn distance_is_bounded(a in location(), b in location()) {
            let d = a.distance_km(&b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * domain::value_objects::EARTH_RADIUS_KM + 1e-6);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(GeoLocation::new(lat, lon).is_err());
        }

        #[test]
        fn total_distance_is_sum_of_legs(stops in prop::collection::vec(location(), 0..8)) {
            let expected: f64 = stops
                .iter()
                .zip(stops.iter().skip(1))
                .map(|(a, b)| a.distance_km(b))
                .sum();
            prop_assert!((total_distance_km(&stops) - expected).abs() < 1e-6);
        }

        #[test]
        fn short_itineraries_have_zero_distance(stops in prop::collection::vec(location(), 0..=1)) {
            prop_assert_eq!(total_distance_km(&stops), 0.0);
        }
    }
}

mod footprint_tests {
    use super::*;

    proptest! {
        #[test]
        fn footprint_scales_linearly(distance in 0.0f64..20_000.0f64) {
            let result = FootprintResult::from_distance(distance, TransportMode::Car.default_factor());
            for mode in TransportMode::ALL {
                let expected = distance * mode.default_factor();
                prop_assert!((result.get(mode) - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }

        #[test]
        fn footprints_are_non_negative(distance in 0.0f64..20_000.0f64, car in 0.0f64..1000.0f64) {
            let result = FootprintResult::from_distance(distance, car);
            for mode in TransportMode::ALL {
                prop_assert!(result.get(mode) >= 0.0);
            }
        }
    }
}
