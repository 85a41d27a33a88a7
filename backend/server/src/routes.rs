use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Response},
};
use shared::{MaintenanceFallbackView, MaintenanceStatus, Settings, StatusFailure};
use tracing::{error, warn};

use crate::{edge_cookie::maintenance_cookie, error::AppError, state::AppState};

/// Status read for clients and the edge layer.
///
/// Every successful read re-stamps the cookie, so a stale edge copy heals on the next call.
/// A storage failure answers 500 with `maintenanceMode: false` and leaves the cookie alone.
pub async fn maintenance_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.settings.read().await {
        Ok(settings) => {
            let maintenance_mode = settings.is_some_and(|s| s.maintenance_mode);

            #[cfg(feature = "verbose")]
            tracing::info!("Maintenance status read: {maintenance_mode}");

            let cookie = maintenance_cookie(maintenance_mode, state.config.production);

            (
                StatusCode::OK,
                [(SET_COOKIE, cookie.to_string())],
                Json(MaintenanceStatus { maintenance_mode }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to read maintenance status: {e}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusFailure::fail_open(
                    "Failed to check maintenance status",
                )),
            )
                .into_response()
        }
    }
}

pub async fn settings_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Settings>, AppError> {
    let settings = state.settings.read().await?.unwrap_or_default();

    Ok(Json(settings))
}

/// Target of redirecting gates. Always renders, with or without contact details.
pub async fn fallback_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let settings = state
        .settings
        .read()
        .await
        .unwrap_or_else(|e| {
            warn!("Rendering maintenance page without contact details: {e}");
            None
        })
        .unwrap_or_default();

    Html(MaintenanceFallbackView::from_settings(&settings).render_html())
}
