//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// An itinerary stop carries neither a usable coordinate pair nor an address
    #[error("Malformed itinerary stop at position {position}: {reason}")]
    MalformedStop { position: usize, reason: String },

    /// Car parameters outside their valid range
    #[error("Invalid car parameters: {0}")]
    InvalidCarParameters(String),

    /// A document that cannot be stored (e.g. not a JSON object)
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Create a malformed stop error for the stop at `position`
    pub fn malformed_stop(position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedStop {
            position,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_message_is_correct() {
        let err = DomainError::not_found("Game", "123");
        assert_eq!(err.to_string(), "Game not found: 123");
    }

    #[test]
    fn malformed_stop_names_position() {
        let err = DomainError::malformed_stop(3, "no coordinates and no address");
        match &err {
            DomainError::MalformedStop { position, .. } => assert_eq!(*position, 3),
            _ => unreachable!("Expected MalformedStop error"),
        }
        assert_eq!(
            err.to_string(),
            "Malformed itinerary stop at position 3: no coordinates and no address"
        );
    }

    #[test]
    fn invalid_car_parameters_message() {
        let err = DomainError::InvalidCarParameters("cylinders must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid car parameters: cylinders must be positive"
        );
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
