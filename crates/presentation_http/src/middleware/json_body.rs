//! JSON body extraction
//!
//! `ApiJson` behaves like `axum::Json` but reports every rejection
//! (syntax errors, wrong shape, missing content type) as a 400 with the
//! usual `detail` body.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// A JSON extractor whose rejections are [`ApiError::BadRequest`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(status = %rejection.status(), "Rejected JSON body");
        Self::BadRequest(rejection.body_text())
    }
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    async fn echo(ApiJson(req): ApiJson<Payload>) -> String {
        req.name
    }

    fn app() -> Router {
        Router::new().route("/echo", post(echo))
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().method("POST").uri("/echo");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let response = app()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let (status, body) = send(Some("application/json"), r#"{"name": "doom"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "doom");
    }

    #[tokio::test]
    async fn syntax_error_is_bad_request_with_detail() {
        let (status, body) = send(Some("application/json"), r#"{"name": nope}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("\"detail\""));
    }

    #[tokio::test]
    async fn wrong_shape_is_bad_request() {
        let (status, _) = send(Some("application/json"), r#"{"title": "doom"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let (status, _) = send(None, r#"{"name": "doom"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
