//! Nominatim client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Cache TTL in hours (0 disables caching)
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: u64,

    /// Comma-separated ISO country codes to restrict results to (empty = worldwide)
    #[serde(default)]
    pub country_filter: String,

    /// Minimum spacing between outgoing requests in milliseconds
    ///
    /// The public Nominatim instance allows at most one request per second.
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_cache_ttl_hours() -> u64 {
    24
}

const fn default_min_request_interval_ms() -> u64 {
    1100
}

fn default_user_agent() -> String {
    concat!("GameAPI/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_hours: default_cache_ttl_hours(),
            country_filter: String::new(),
            min_request_interval_ms: default_min_request_interval_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimConfig {
    /// Configuration pointing at a local mock server, without caching or throttling
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cache_ttl_hours: 0,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Whether successful lookups are cached
    #[must_use]
    pub const fn cache_enabled(&self) -> bool {
        self.cache_ttl_hours > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_public_instance() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.cache_ttl_hours, 24);
        assert!(config.country_filter.is_empty());
        assert_eq!(config.min_request_interval_ms, 1100);
        assert!(config.user_agent.starts_with("GameAPI/"));
    }

    #[test]
    fn for_testing_disables_cache_and_throttle() {
        let config = NominatimConfig::for_testing("http://127.0.0.1:9");
        assert!(!config.cache_enabled());
        assert_eq!(config.min_request_interval_ms, 0);
        assert_eq!(config.base_url, "http://127.0.0.1:9");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: NominatimConfig = serde_json::from_str(r#"{"country_filter": "fr"}"#).unwrap();
        assert_eq!(config.country_filter, "fr");
        assert_eq!(config.timeout_secs, 5);
    }
}
