//! Itinerary normalization
//!
//! Turns classified itinerary stops into an ordered list of coordinates,
//! geocoding address stops concurrently.
//!
//! A geocoder that spaces its outgoing requests makes concurrent lookups
//! queue behind each other. The k-th address of an itinerary may wait
//! `k * request_spacing` for its turn, so that wait is added to its budget
//! on top of the per-call timeout.

use std::{sync::Arc, time::Duration};

use domain::{
    entities::{Itinerary, ItineraryStop},
    value_objects::GeoLocation,
};
use futures::future::try_join_all;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::GeocodingPort};

/// Resolves every stop of an itinerary to a coordinate
pub struct ItineraryNormalizer {
    geocoder: Arc<dyn GeocodingPort>,
    timeout: Duration,
    request_spacing: Duration,
}

impl std::fmt::Debug for ItineraryNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItineraryNormalizer")
            .field("geocoder", &"<GeocodingPort>")
            .field("timeout", &self.timeout)
            .field("request_spacing", &self.request_spacing)
            .finish()
    }
}

impl ItineraryNormalizer {
    /// Create a normalizer bounding each geocoder call by `timeout`
    pub fn new(geocoder: Arc<dyn GeocodingPort>, timeout: Duration) -> Self {
        Self {
            geocoder,
            timeout,
            request_spacing: Duration::ZERO,
        }
    }

    /// Minimum spacing the geocoder keeps between outgoing requests
    #[must_use]
    pub const fn with_request_spacing(mut self, spacing: Duration) -> Self {
        self.request_spacing = spacing;
        self
    }

    /// Budget for the address at `queue_position` among the itinerary's addresses
    fn budget(&self, queue_position: u32) -> Duration {
        self.timeout
            .saturating_add(self.request_spacing.saturating_mul(queue_position))
    }

    /// Resolve all stops, keeping itinerary order
    ///
    /// Coordinate stops pass through untouched. Address stops are resolved
    /// concurrently; the first failure aborts the whole itinerary with
    /// `ApplicationError::Resolution`.
    #[instrument(skip(self, itinerary), fields(stops = itinerary.len(), unresolved = itinerary.unresolved_count()))]
    pub async fn normalize(
        &self,
        itinerary: &Itinerary,
    ) -> Result<Vec<GeoLocation>, ApplicationError> {
        let mut queue_position = 0_u32;
        let lookups = itinerary.stops().iter().map(|stop| {
            let budget = self.budget(queue_position);
            if matches!(stop, ItineraryStop::Address(_)) {
                queue_position = queue_position.saturating_add(1);
            }
            self.resolve_stop(stop, budget)
        });
        let locations = try_join_all(lookups).await?;
        debug!(resolved = locations.len(), "Itinerary normalized");
        Ok(locations)
    }

    async fn resolve_stop(
        &self,
        stop: &ItineraryStop,
        budget: Duration,
    ) -> Result<GeoLocation, ApplicationError> {
        match stop {
            ItineraryStop::Coordinates(location) => Ok(*location),
            ItineraryStop::Address(address) => self.resolve_address(address, budget).await,
        }
    }

    async fn resolve_address(
        &self,
        address: &str,
        budget: Duration,
    ) -> Result<GeoLocation, ApplicationError> {
        match timeout(budget, self.geocoder.geocode(address)).await {
            Ok(Ok(Some(location))) => {
                debug!(address = %address, location = %location, "Address resolved");
                Ok(location)
            }
            Ok(Ok(None)) => {
                warn!(address = %address, "Address not found");
                Err(ApplicationError::resolution(address, "no match found"))
            }
            Ok(Err(e)) => {
                warn!(address = %address, error = %e, "Geocoder failed");
                Err(ApplicationError::resolution(address, e.to_string()))
            }
            Err(_) => {
                warn!(address = %address, budget_secs = budget.as_secs_f64(), "Geocoder timed out");
                Err(ApplicationError::resolution(
                    address,
                    format!("geocoder timed out after {budget:?}"),
                ))
            }
        }
    }
}
