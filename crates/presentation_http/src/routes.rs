//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, openapi, state::AppState};

/// Create the main router with all routes and layers
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let body_limit = server.max_body_size_json_bytes;
    let cors = cors_layer(server);

    let api = Router::new()
        .route("/ping", get(handlers::ping::ping))
        .route("/footprint", post(handlers::footprint::compute_footprint))
        .route(
            "/games",
            get(handlers::games::list_games).post(handlers::games::add_game),
        )
        .route("/games/multiple", post(handlers::games::add_games))
        .route("/games/{game_id}", get(handlers::games::get_game))
        .route("/register", post(handlers::users::register))
        .route("/login", post(handlers::users::login));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .nest("/api", api)
        .merge(openapi::create_openapi_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Allow any origin when none are configured, otherwise only the listed ones
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            let parsed = origin.parse().ok();
            if parsed.is_none() {
                warn!(origin = %origin, "Ignoring unparsable CORS origin");
            }
            parsed
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
