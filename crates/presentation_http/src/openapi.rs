//! OpenAPI documentation
//!
//! Serves the document at `/api-docs/openapi.json` and Swagger UI at
//! `/swagger-ui`.

// utoipa derive output
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GameAPI",
        description = "Game catalog, accounts and itinerary carbon footprint estimation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers((url = "/", description = "Local server")),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "footprint", description = "Itinerary carbon footprint"),
        (name = "games", description = "Game catalog"),
        (name = "users", description = "Registration and login")
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::ping::ping,
        handlers::footprint::compute_footprint,
        handlers::games::list_games,
        handlers::games::get_game,
        handlers::games::add_game,
        handlers::games::add_games,
        handlers::users::register,
        handlers::users::login,
    ),
    components(schemas(
        handlers::health::HealthResponse,
        handlers::health::ReadinessResponse,
        handlers::health::ServiceStatus,
        handlers::ping::PingResponse,
        handlers::footprint::FootprintRequest,
        handlers::footprint::StopRequest,
        handlers::footprint::CarParamsRequest,
        handlers::footprint::FootprintResponse,
        handlers::games::AddGameResponse,
        handlers::games::AddGamesResponse,
        handlers::users::CredentialsRequest,
        handlers::users::RegisterResponse,
        handlers::users::LoginResponse,
        crate::error::ErrorResponse,
    ))
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it reads
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
