//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// HTTP client could not be built or the connection failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Service answered with a non-success status
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be interpreted
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Service refused the request due to rate limiting (HTTP 429)
    #[error("Geocoding rate limit exceeded")]
    RateLimitExceeded,

    /// Request timed out
    #[error("Geocoding request timed out")]
    Timeout,
}

impl From<reqwest::Error> for GeocodingError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::ParseError(e.to_string())
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
