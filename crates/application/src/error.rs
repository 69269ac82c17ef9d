//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// An itinerary address could not be geocoded
    #[error("Could not resolve address '{address}': {reason}")]
    Resolution { address: String, reason: String },

    /// Emission model unavailable or produced unusable output
    #[error("Emission model error: {0}")]
    Model(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by a use case
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Credentials rejected
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Build a resolution error for `address`
    pub fn resolution(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolution {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_names_address() {
        let err = ApplicationError::resolution("Atlantis", "no match found");
        assert_eq!(
            err.to_string(),
            "Could not resolve address 'Atlantis': no match found"
        );
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err: ApplicationError = DomainError::malformed_stop(1, "empty").into();
        assert_eq!(
            err.to_string(),
            "Malformed itinerary stop at position 1: empty"
        );
    }
}
