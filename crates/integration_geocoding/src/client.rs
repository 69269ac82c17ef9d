//! Nominatim geocoding client
//!
//! Outgoing requests are spaced by `min_request_interval_ms` across all
//! concurrent callers. Successful lookups are cached by normalized address;
//! misses are not cached.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use moka::future::Cache;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, instrument, warn};

use crate::{config::NominatimConfig, error::GeocodingError};

const MAX_CACHE_ENTRIES: u64 = 1000;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a free-form address
    ///
    /// `Ok(None)` means the service found no match.
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodingError>;
}

/// Nominatim-based geocoding client with request spacing and caching
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, GeoLocation>>,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        let cache = config.cache_enabled().then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(config.cache_ttl_hours * 3600))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Mutex::new(None),
        })
    }

    /// Wait until the configured spacing since the previous request has passed
    async fn throttle(&self) {
        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Throttling geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    async fn cached(&self, key: &str) -> Option<GeoLocation> {
        match &self.cache {
            Some(cache) => cache.get(key).await,
            None => None,
        }
    }

    async fn search(&self, address: &str) -> Result<Option<GeoLocation>, GeocodingError> {
        self.throttle().await;

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let mut params = vec![
            ("q", address.to_string()),
            ("format", "jsonv2".to_string()),
            ("limit", "1".to_string()),
        ];
        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.clone()));
        }

        let response = self.client.get(&url).query(&params).send().await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(GeocodingError::RateLimitExceeded),
            status if !status.is_success() => {
                return Err(GeocodingError::RequestFailed(format!("HTTP {status}")));
            }
            _ => {}
        }

        let results: Vec<SearchResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        results.first().map(SearchResult::location).transpose()
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<GeoLocation>, GeocodingError> {
        let address = address.trim();
        if address.is_empty() {
            return Ok(None);
        }

        let cache_key = address.to_lowercase();
        if let Some(location) = self.cached(&cache_key).await {
            debug!("Geocoding cache hit");
            return Ok(Some(location));
        }

        let location = self.search(address).await?;
        match (&location, &self.cache) {
            (Some(found), Some(cache)) => {
                cache.insert(cache_key, *found).await;
                debug!(location = %found, "Geocoded address");
            }
            (Some(found), None) => debug!(location = %found, "Geocoded address"),
            (None, _) => warn!("No geocoding match"),
        }
        Ok(location)
    }
}

/// One entry of a Nominatim `jsonv2` search response
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl SearchResult {
    fn location(&self) -> Result<GeoLocation, GeocodingError> {
        let lat: f64 = self
            .lat
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("invalid latitude '{}'", self.lat)))?;
        let lon: f64 = self
            .lon
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("invalid longitude '{}'", self.lon)))?;
        GeoLocation::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}
