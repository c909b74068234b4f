use wks_realtime::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Process status with live connection and delivery counters
pub async fn health(State(state): State<AppState>) -> Response {
    let body = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "connections": {
            "registered": state.registry.connection_count(),
            "open": state.limits.open_count(),
            "max": state.limits.max_total(),
        },
        "usersOnline": state.registry.online_user_count(),
        "delivery": state.stats.snapshot(),
        "shuttingDown": state.shutdown.is_shutdown(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe, pings the store
pub async fn readiness(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }

    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
