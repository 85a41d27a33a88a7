//! Storefront maintenance gating server.
//!
//!
//!
//! # Maintenance Mode
//!
//! **Goal**: close the storefront to everyone but administrators with one flag, without any
//! route leaking through while the flag is set.
//!
//! - The settings record in Redis holds the authoritative flag
//! - `GET /api/maintenance` reads it and answers `{ "maintenanceMode": bool }`
//! - The same read stamps a `maintenance_mode` cookie for the edge layer, 30 day max-age
//! - The edge proxy turns away requests carrying `maintenance_mode=true` without touching Redis
//! - Clients keep one cached copy of the flag and gate every page boundary on it
//! - Administrators bypass the gate, decided from the live session, never from the cookie
//!
//!
//!
//! # Failure Policy
//!
//! Fail open. A broken settings read answers 500 with `maintenanceMode: false` and leaves the
//! cookie untouched. Blocking the whole store over a transient outage is worse than a short
//! window of staleness.
//!
//!
//!
//! # Routes
//!
//! - `GET /api/maintenance`: status read plus cookie
//! - `GET /api/settings`: flag and contact details
//! - `GET /maintenance`: fallback page redirecting gates navigate to
//!
//!
//!
//! # Environment
//!
//! - `RUST_PORT`: listen port, default `1111`
//! - `REDIS_URL`: settings backend, in-memory when unset
//! - `RUST_ENV`: `production` marks the cookie `Secure`
//! - `RUST_LOG`: tracing filter
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use shared::{FALLBACK_ROUTE, SETTINGS_ROUTE, STATUS_ROUTE};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod edge_cookie;
pub mod error;
pub mod routes;
pub mod state;

use error::AppError;
use routes::{fallback_handler, maintenance_handler, settings_handler};
use state::AppState;

pub async fn start_server() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(STATUS_ROUTE, get(maintenance_handler))
        .route(SETTINGS_ROUTE, get(settings_handler))
        .route(FALLBACK_ROUTE, get(fallback_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
