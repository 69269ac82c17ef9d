//! GameAPI HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    FootprintService, GameService, HealthService, UserService,
    ports::{EmissionModelPort, GeocodingPort},
};
use infrastructure::{
    AppConfig, Argon2PasswordHasher, Database, GeocodingAdapter, LinearEmissionModel,
    SqliteDatabaseHealth, SqliteGameStore, SqliteUserStore,
};
use presentation_http::{AppState, create_router, serve_until, set_expose_internal_errors};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "gameapi_server=debug,presentation_http=debug,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(config.server.json_logs());

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "GameAPI starting"
    );
    set_expose_internal_errors(config.expose_internal_errors());

    let database = Database::connect(&config.database).await?;
    if config.database.run_migrations {
        database.migrate().await?;
    }
    let pool = database.pool().clone();

    let model = load_emission_model(&config);
    let geocoder: Arc<dyn GeocodingPort> =
        Arc::new(GeocodingAdapter::nominatim(&config.geocoding)?);

    let state = AppState {
        footprint_service: Arc::new(
            FootprintService::new(geocoder, model.clone(), &config.footprint)
                .with_geocoder_spacing(Duration::from_millis(
                    config.geocoding.min_request_interval_ms,
                )),
        ),
        game_service: Arc::new(GameService::new(Arc::new(SqliteGameStore::new(
            pool.clone(),
        )))),
        user_service: Arc::new(UserService::new(
            Arc::new(SqliteUserStore::new(pool.clone())),
            Arc::new(Argon2PasswordHasher::new()),
        )),
        health_service: Arc::new(HealthService::new(
            Arc::new(SqliteDatabaseHealth::new(pool)),
            model,
        )),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "Server listening");
    info!("API docs: http://{addr}/swagger-ui");

    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    serve_until(listener, app, shutdown_signal(), drain_timeout).await?;

    database.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Load the emission model once; the server still starts without it
fn load_emission_model(config: &AppConfig) -> Option<Arc<dyn EmissionModelPort>> {
    let path = &config.emission_model.artifact_path;
    match LinearEmissionModel::load(path) {
        Ok(model) => {
            info!(model = %model.name(), path = %path.display(), "Emission model loaded");
            Some(Arc::new(model) as Arc<dyn EmissionModelPort>)
        },
        Err(e) => {
            warn!(
                error = %e,
                path = %path.display(),
                "Emission model unavailable, car parameter requests will fail"
            );
            None
        },
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
