use crate::{
    ActivityRecorder, ConnectionConfig, ConnectionId, ConnectionLimits, ConnectionRegistry,
    ConnectionSlot, DeliveryStats, EventFanout, HandshakeQuery, Metrics, PresenceService,
    ShutdownCoordinator, WebSocketConnection, resolve_identity,
};

use wks_auth::JwtValidator;
use wks_config::ActivityConfig;
use wks_core::{UserId, WorkspaceId};

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, error, warn};
use sqlx::SqlitePool;
use tokio::sync::mpsc;

/// Shared state of the real-time layer and the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when authentication is disabled
    pub jwt_validator: Option<Arc<JwtValidator>>,
    pub registry: ConnectionRegistry,
    pub limits: ConnectionLimits,
    pub presence: PresenceService,
    pub fanout: EventFanout,
    pub recorder: ActivityRecorder,
    pub stats: DeliveryStats,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    pub activity: ActivityConfig,
}

impl AppState {
    /// Wire the registry, fan-out and services around one pool.
    pub fn new(
        pool: SqlitePool,
        jwt_validator: Option<Arc<JwtValidator>>,
        config: ConnectionConfig,
        activity: ActivityConfig,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let registry = ConnectionRegistry::new();
        let stats = DeliveryStats::new();
        let metrics = Metrics::new();
        let fanout = EventFanout::new(
            pool.clone(),
            registry.clone(),
            stats.clone(),
            metrics.clone(),
        );

        Self {
            presence: PresenceService::new(pool.clone(), registry.clone(), metrics.clone()),
            recorder: ActivityRecorder::new(pool.clone(), fanout.clone()),
            limits: ConnectionLimits::new(config.max_connections),
            pool,
            jwt_validator,
            registry,
            fanout,
            stats,
            metrics,
            shutdown,
            config,
            activity,
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    Query(query): Query<HandshakeQuery>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    let user_id = resolve_identity(query.token.as_deref(), state.jwt_validator.as_deref())
        .map_err(|e| {
            warn!("Rejected WebSocket handshake: {}", e);
            state.metrics.connection_refused("unauthorized");
            StatusCode::UNAUTHORIZED
        })?;

    let slot = state.limits.try_acquire().ok_or_else(|| {
        warn!(
            "Connection limit reached ({}), refusing handshake",
            state.limits.max_total()
        );
        state.metrics.connection_refused("limit");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let connection_id = ConnectionId::new();
    debug!("WebSocket upgrade {connection_id} (user {user_id:?})");

    Ok(ws.on_upgrade(move |socket| {
        handle_socket(socket, connection_id, user_id, query.workspace_id, state, slot)
    }))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    user_id: Option<UserId>,
    workspace_id: Option<WorkspaceId>,
    state: AppState,
    _slot: ConnectionSlot,
) {
    let (tx, rx) = mpsc::channel(state.config.send_buffer_size);

    if let Some(user_id) = user_id {
        for change in state.registry.register(connection_id, user_id, tx.clone()) {
            state.fanout.announce(change);
        }
        if let Some(workspace_id) = workspace_id {
            state.registry.update_activity(user_id, workspace_id, None);
        }
    }

    let connection = WebSocketConnection::new(
        connection_id,
        user_id,
        state.registry.clone(),
        state.fanout.clone(),
        state.presence.clone(),
        state.metrics.clone(),
    );

    if let Err(e) = connection
        .handle(socket, tx, rx, state.shutdown.subscribe_guard())
        .await
    {
        error!("Connection {connection_id} error: {e}");
    }
}
