//! Account handlers

use axum::{Json, extract::State, http::StatusCode};
use domain::entities::User;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::ApiJson, state::AppState};

/// Username and password pair
///
/// Both fields are optional at the JSON level so that missing values are
/// reported as invalid user data rather than as a parse failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Password)]
    pub password: Option<SecretString>,
}

impl CredentialsRequest {
    fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    fn password(&self) -> &str {
        self.password
            .as_ref()
            .map_or("", |p| p.expose_secret())
    }
}

/// Public view of a freshly registered user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub token: String,
    pub likes: Vec<String>,
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            token: user.token,
            likes: user.likes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "users",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid user data or user already registered", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = state
        .user_service
        .register(request.username(), request.password())
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchange credentials for the account token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "users",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid user data", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid username or password", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state
        .user_service
        .login(request.username(), request.password())
        .await?;
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
    }))
}
