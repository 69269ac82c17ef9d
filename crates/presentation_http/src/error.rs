//! API error handling
//!
//! Every error is rendered as `{"detail": "<message>"}`. Client errors
//! always carry their message; server-side failures only do so while
//! internal error exposure is enabled (development).

use std::sync::atomic::{AtomicBool, Ordering};

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

const GENERIC_INTERNAL: &str = "An internal error occurred";
const GENERIC_UNAVAILABLE: &str = "Service temporarily unavailable";

/// Configure whether server-side error details reach clients
///
/// Set to `false` in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub detail: String,
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `detail` field
    fn detail(&self, expose: bool) -> String {
        match self {
            Self::BadRequest(msg) | Self::Unauthorized(msg) | Self::NotFound(msg) => msg.clone(),
            Self::ServiceUnavailable(msg) if expose => msg.clone(),
            Self::ServiceUnavailable(_) => GENERIC_UNAVAILABLE.to_string(),
            Self::Internal(msg) if expose => msg.clone(),
            Self::Internal(_) => GENERIC_INTERNAL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(msg) => error!(error = %msg, "Request failed"),
            Self::ServiceUnavailable(msg) => warn!(error = %msg, "Dependency unavailable"),
            _ => {},
        }

        let body = ErrorResponse {
            detail: self.detail(should_expose_details()),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            e @ ApplicationError::Resolution { .. } => Self::BadRequest(e.to_string()),
            e @ ApplicationError::Model(_) => Self::Internal(e.to_string()),
            ApplicationError::NotFound(msg) => Self::NotFound(msg),
            ApplicationError::InvalidOperation(msg) => Self::BadRequest(msg),
            ApplicationError::NotAuthorized(msg) => Self::Unauthorized(msg),
            ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}
