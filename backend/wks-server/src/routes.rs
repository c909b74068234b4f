use crate::{
    create_activity, get_user_presence, get_workspace_presence, health, list_my_activity,
    list_online_users, list_workspace_activity, update_presence,
};

use wks_realtime::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // WebSocket endpoint
        .route("/ws", get(wks_realtime::handler))
        // Presence
        .route("/presence/workspace/{workspace_id}", get(get_workspace_presence))
        .route("/presence/update", post(update_presence))
        .route("/presence/users/{user_id}", get(get_user_presence))
        .route("/presence/online", get(list_online_users))
        // Activity log
        .route("/activity", get(list_my_activity))
        .route(
            "/workspaces/{workspace_id}/activity",
            get(list_workspace_activity).post(create_activity),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// `GET /metrics` in Prometheus text format
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}
