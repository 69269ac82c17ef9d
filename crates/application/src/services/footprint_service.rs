//! Carbon footprint estimation
//!
//! Normalizes an itinerary, accumulates great-circle distance over
//! consecutive stops and applies per-mode emission factors. The car factor
//! comes from the emission model when car parameters are supplied.

use std::{sync::Arc, time::Duration};

use domain::{
    DomainError,
    entities::{FootprintResult, Itinerary, total_distance_km},
    value_objects::{CarParameters, TransportMode},
};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{EmissionModelPort, GeocodingPort},
    services::ItineraryNormalizer,
};

/// Limits applied to footprint requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintConfig {
    /// Upper bound for a single geocoder call, in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub geocoding_timeout_secs: u64,

    /// Upper bound for a single model prediction, in seconds
    #[serde(default = "default_model_timeout")]
    pub model_timeout_secs: u64,

    /// Longest accepted itinerary
    #[serde(default = "default_max_stops")]
    pub max_stops: usize,
}

const fn default_geocoding_timeout() -> u64 {
    10
}

const fn default_model_timeout() -> u64 {
    2
}

const fn default_max_stops() -> usize {
    100
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            geocoding_timeout_secs: default_geocoding_timeout(),
            model_timeout_secs: default_model_timeout(),
            max_stops: default_max_stops(),
        }
    }
}

impl FootprintConfig {
    pub const fn geocoding_timeout(&self) -> Duration {
        Duration::from_secs(self.geocoding_timeout_secs)
    }

    pub const fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }
}

/// Footprint calculator
pub struct FootprintService {
    normalizer: ItineraryNormalizer,
    model: Option<Arc<dyn EmissionModelPort>>,
    model_timeout: Duration,
    max_stops: usize,
}

impl std::fmt::Debug for FootprintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootprintService")
            .field("normalizer", &self.normalizer)
            .field("model", &self.model.as_ref().map(|m| m.name()))
            .field("model_timeout", &self.model_timeout)
            .field("max_stops", &self.max_stops)
            .finish()
    }
}

impl FootprintService {
    /// Create a footprint service
    ///
    /// `model` is `None` when no emission model could be loaded; requests
    /// with car parameters then fail with `ApplicationError::Model`.
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        model: Option<Arc<dyn EmissionModelPort>>,
        config: &FootprintConfig,
    ) -> Self {
        Self {
            normalizer: ItineraryNormalizer::new(geocoder, config.geocoding_timeout()),
            model,
            model_timeout: config.model_timeout(),
            max_stops: config.max_stops,
        }
    }

    /// Let address lookups wait for a geocoder that spaces its requests
    #[must_use]
    pub fn with_geocoder_spacing(mut self, spacing: Duration) -> Self {
        self.normalizer = self.normalizer.with_request_spacing(spacing);
        self
    }

    /// Estimate the footprint of an itinerary for every transport mode
    #[instrument(skip(self, itinerary), fields(stops = itinerary.len(), car_params = car.is_some()))]
    pub async fn estimate(
        &self,
        itinerary: &Itinerary,
        car: Option<CarParameters>,
    ) -> Result<FootprintResult, ApplicationError> {
        if itinerary.len() > self.max_stops {
            return Err(DomainError::ValidationError(format!(
                "itinerary has {} stops, at most {} are allowed",
                itinerary.len(),
                self.max_stops
            ))
            .into());
        }

        let locations = self.normalizer.normalize(itinerary).await?;
        let distance_km = total_distance_km(&locations);

        let car_factor = match car {
            Some(params) => self.predict_car_factor(&params).await?,
            None => TransportMode::Car.default_factor(),
        };

        let result = FootprintResult::from_distance(distance_km, car_factor);
        info!(distance_km, car_factor, "Footprint estimated");
        Ok(result)
    }

    async fn predict_car_factor(&self, params: &CarParameters) -> Result<f64, ApplicationError> {
        let Some(model) = self.model.as_ref() else {
            warn!("Car parameters supplied but no emission model is loaded");
            return Err(ApplicationError::Model(
                "emission model is not loaded".to_string(),
            ));
        };

        let factor = match timeout(self.model_timeout, model.predict(params)).await {
            Ok(Ok(factor)) => factor,
            Ok(Err(ApplicationError::Model(reason))) => return Err(ApplicationError::Model(reason)),
            Ok(Err(e)) => return Err(ApplicationError::Model(e.to_string())),
            Err(_) => {
                warn!(model = %model.name(), "Emission model timed out");
                return Err(ApplicationError::Model(format!(
                    "prediction timed out after {:?}",
                    self.model_timeout
                )));
            }
        };

        if !factor.is_finite() || factor < 0.0 {
            warn!(model = %model.name(), factor, "Emission model returned unusable factor");
            return Err(ApplicationError::Model(format!(
                "model returned an unusable factor: {factor}"
            )));
        }

        debug!(
            model = %model.name(),
            cylinders = params.cylinders(),
            consumption = params.consumption(),
            factor,
            "Car emission factor predicted"
        );
        Ok(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockEmissionModelPort, MockGeocodingPort};
    use domain::{entities::StopFields, value_objects::GeoLocation};

    fn paris_lyon() -> Itinerary {
        Itinerary::from_fields(vec![
            StopFields::coordinates(48.8566, 2.3522),
            StopFields::coordinates(45.764, 4.8357),
        ])
        .unwrap()
    }

    fn no_geocoding() -> Arc<dyn GeocodingPort> {
        let mut mock = MockGeocodingPort::new();
        mock.expect_geocode().never();
        Arc::new(mock)
    }

    fn model_returning(factor: f64) -> Arc<dyn EmissionModelPort> {
        let mut mock = MockEmissionModelPort::new();
        mock.expect_name().return_const("test-model".to_string());
        mock.expect_predict().returning(move |_| Ok(factor));
        Arc::new(mock)
    }

    fn service(model: Option<Arc<dyn EmissionModelPort>>) -> FootprintService {
        FootprintService::new(no_geocoding(), model, &FootprintConfig::default())
    }

    fn car_params() -> Option<CarParameters> {
        Some(CarParameters::new(4, 7.5).unwrap())
    }

    #[tokio::test]
    async fn default_factors_apply_without_car_params() {
        let itinerary = paris_lyon();
        let result = service(None).estimate(&itinerary, None).await.unwrap();

        let stops: Vec<_> = itinerary
            .stops()
            .iter()
            .map(|s| match s {
                domain::entities::ItineraryStop::Coordinates(loc) => *loc,
                domain::entities::ItineraryStop::Address(_) => unreachable!(),
            })
            .collect();
        let d = total_distance_km(&stops);

        for mode in TransportMode::ALL {
            let expected = d * mode.default_factor();
            assert!((result.get(mode) - expected).abs() < 1e-6, "{mode}");
        }
    }

    #[tokio::test]
    async fn paris_lyon_train_footprint() {
        let result = service(None).estimate(&paris_lyon(), None).await.unwrap();
        let expected = 392.0 * 30.0;
        assert!(
            (result.train_footprint - expected).abs() / expected < 0.05,
            "got {}",
            result.train_footprint
        );
    }

    #[tokio::test]
    async fn single_stop_is_all_zero() {
        let itinerary = Itinerary::from_fields(vec![StopFields::coordinates(0.0, 0.0)]).unwrap();
        let result = service(None).estimate(&itinerary, None).await.unwrap();
        assert_eq!(result, FootprintResult::zero());
    }

    #[tokio::test]
    async fn model_factor_replaces_car_default() {
        let itinerary = paris_lyon();
        let plain = service(None).estimate(&itinerary, None).await.unwrap();
        let refined = service(Some(model_returning(200.0)))
            .estimate(&itinerary, car_params())
            .await
            .unwrap();

        let d = plain.car_footprint / 120.0;
        assert!((refined.car_footprint - d * 200.0).abs() < 1e-6);
        assert!((refined.bus_footprint - plain.bus_footprint).abs() < 1e-9);
    }

    #[tokio::test]
    async fn model_receives_car_parameters() {
        let mut mock = MockEmissionModelPort::new();
        mock.expect_name().return_const("test-model".to_string());
        mock.expect_predict()
            .withf(|p| p.cylinders() == 6 && (p.consumption() - 11.0).abs() < f64::EPSILON)
            .times(1)
            .returning(|_| Ok(250.0));

        let params = CarParameters::new(6, 11.0).ok();
        let result = service(Some(Arc::new(mock)))
            .estimate(&paris_lyon(), params)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn missing_model_is_model_error() {
        let err = service(None)
            .estimate(&paris_lyon(), car_params())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Model(_)));
    }

    #[tokio::test]
    async fn model_failure_is_model_error() {
        let mut mock = MockEmissionModelPort::new();
        mock.expect_name().return_const("test-model".to_string());
        mock.expect_predict()
            .returning(|_| Err(ApplicationError::Internal("boom".into())));

        let err = service(Some(Arc::new(mock)))
            .estimate(&paris_lyon(), car_params())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Model(ref m) if m.contains("boom")));
    }

    #[tokio::test]
    async fn unusable_prediction_is_model_error() {
        for factor in [f64::NAN, f64::INFINITY, -1.0] {
            let err = service(Some(model_returning(factor)))
                .estimate(&paris_lyon(), car_params())
                .await
                .unwrap_err();
            assert!(matches!(err, ApplicationError::Model(_)), "{factor}");
        }
    }

    #[tokio::test]
    async fn model_is_consulted_for_short_itineraries() {
        let itinerary = Itinerary::from_fields(vec![StopFields::coordinates(0.0, 0.0)]).unwrap();
        let err = service(None)
            .estimate(&itinerary, car_params())
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Model(_)));
    }

    #[tokio::test]
    async fn too_many_stops_is_rejected() {
        let config = FootprintConfig {
            max_stops: 2,
            ..FootprintConfig::default()
        };
        let service = FootprintService::new(no_geocoding(), None, &config);
        let itinerary = Itinerary::from_fields(vec![StopFields::coordinates(0.0, 0.0); 3]).unwrap();

        let err = service.estimate(&itinerary, None).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn resolution_failure_aborts_estimate() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().returning(|_| Ok(None));
        let service = FootprintService::new(Arc::new(geocoder), None, &FootprintConfig::default());
        let itinerary = Itinerary::from_fields(vec![
            StopFields::address("Nowhere"),
            StopFields::coordinates(45.764, 4.8357),
        ])
        .unwrap();

        let err = service.estimate(&itinerary, None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Resolution { .. }));
    }

    /// Answers one lookup at a time, one per second
    struct OneLookupPerSecond(tokio::sync::Mutex<()>);

    #[async_trait::async_trait]
    impl GeocodingPort for OneLookupPerSecond {
        async fn geocode(&self, _address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
            let _turn = self.0.lock().await;
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(GeoLocation::new(45.0, 5.0).ok())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_geocoder_resolves_long_address_itinerary() {
        let service = FootprintService::new(
            Arc::new(OneLookupPerSecond(tokio::sync::Mutex::new(()))),
            None,
            &FootprintConfig::default(),
        )
        .with_geocoder_spacing(Duration::from_secs(1));
        let itinerary = Itinerary::from_fields(
            (0..30).map(|i| StopFields::address(format!("Town {i}"))),
        )
        .unwrap();

        let result = service.estimate(&itinerary, None).await.unwrap();
        assert!(result.train_footprint.abs() < f64::EPSILON);
    }
}
