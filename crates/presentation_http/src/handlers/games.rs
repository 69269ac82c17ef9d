//! Game catalog handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;
use utoipa::ToSchema;

use crate::{error::ApiError, middleware::ApiJson, state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddGameResponse {
    pub message: String,
    pub inserted_game_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddGamesResponse {
    pub message: String,
    pub inserted_games_ids: Vec<String>,
}

/// First page of games with summary fields only
#[utoipa::path(
    get,
    path = "/api/games",
    tag = "games",
    responses(
        (status = 200, description = "Up to 10 game summaries", body = Vec<serde_json::Value>)
    )
)]
#[instrument(skip(state))]
pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.game_service.list().await?))
}

/// A full game document
#[utoipa::path(
    get,
    path = "/api/games/{game_id}",
    tag = "games",
    params(("game_id" = String, Path, description = "Game identifier")),
    responses(
        (status = 200, description = "Game document", body = serde_json::Value),
        (status = 404, description = "No game with that id", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.game_service.get(&game_id).await?))
}

/// Store one game document
#[utoipa::path(
    post,
    path = "/api/games",
    tag = "games",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Game stored", body = AddGameResponse),
        (status = 400, description = "Body is not a JSON object", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn add_game(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<(StatusCode, Json<AddGameResponse>), ApiError> {
    let id = state.game_service.add(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddGameResponse {
            message: "Game added successfully".to_string(),
            inserted_game_id: id.to_string(),
        }),
    ))
}

/// Store a batch of game documents, all or nothing
#[utoipa::path(
    post,
    path = "/api/games/multiple",
    tag = "games",
    request_body = Vec<serde_json::Value>,
    responses(
        (status = 201, description = "Games stored", body = AddGamesResponse),
        (status = 400, description = "Empty batch or non-object element", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, body))]
pub async fn add_games(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<(StatusCode, Json<AddGamesResponse>), ApiError> {
    let ids = state.game_service.add_many(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(AddGamesResponse {
            message: "Games added successfully".to_string(),
            inserted_games_ids: ids.iter().map(ToString::to_string).collect(),
        }),
    ))
}
