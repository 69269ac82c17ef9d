//! Connectivity probe

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PingResponse {
    pub ping: String,
}

#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "health",
    responses((status = 200, description = "Pong", body = PingResponse))
)]
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ping: "pong".to_string(),
    })
}
