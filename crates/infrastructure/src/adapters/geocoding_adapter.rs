//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimGeocodingClient};
use tracing::{instrument, warn};

/// Adapter exposing a geocoding client as the application's geocoding port
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"<GeocodingClient>")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Wrap an existing geocoding client
    pub fn new(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Build an adapter backed by Nominatim
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the HTTP client cannot be built.
    pub fn nominatim(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        self.client.geocode(address).await.map_err(|e| {
            warn!(error = %e, "Geocoding request failed");
            ApplicationError::ExternalService(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_geocoding::GeocodingError;

    struct FixedClient(Result<Option<(f64, f64)>, ()>);

    #[async_trait]
    impl GeocodingClient for FixedClient {
        async fn geocode(&self, _address: &str) -> Result<Option<GeoLocation>, GeocodingError> {
            match self.0 {
                Ok(Some((lat, lon))) => Ok(GeoLocation::new(lat, lon).ok()),
                Ok(None) => Ok(None),
                Err(()) => Err(GeocodingError::Timeout),
            }
        }
    }

    #[tokio::test]
    async fn passes_through_match() {
        let adapter = GeocodingAdapter::new(Arc::new(FixedClient(Ok(Some((48.85, 2.29))))));
        let location = adapter.geocode("Paris").await.unwrap().unwrap();
        assert!((location.latitude() - 48.85).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn passes_through_no_match() {
        let adapter = GeocodingAdapter::new(Arc::new(FixedClient(Ok(None))));
        assert!(adapter.geocode("Atlantis").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn client_errors_become_external_service_errors() {
        let adapter = GeocodingAdapter::new(Arc::new(FixedClient(Err(()))));
        let err = adapter.geocode("Paris").await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(ref m) if m.contains("timed out")));
    }

    #[test]
    fn builds_nominatim_adapter_from_default_config() {
        assert!(GeocodingAdapter::nominatim(&NominatimConfig::default()).is_ok());
    }
}
