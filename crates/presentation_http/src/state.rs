//! Application state shared across handlers

use std::sync::Arc;

use application::{FootprintService, GameService, HealthService, UserService};
use infrastructure::AppConfig;

/// Context handed to every handler
///
/// Built once at startup; services hold their adapters behind `Arc`s so
/// cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub footprint_service: Arc<FootprintService>,
    pub game_service: Arc<GameService>,
    pub user_service: Arc<UserService>,
    pub health_service: Arc<HealthService>,
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("footprint_service", &self.footprint_service)
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}
