use crate::{
    ClientMessage, ConnectionId, ConnectionRegistry, EventFanout, Metrics, PresenceService,
    Result as WsErrorResult, ServerEvent, ShutdownGuard, WsError, create_request_span,
};

use wks_core::UserId;

use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tracing::Instrument;

/// Manages a single WebSocket connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    /// `None` for anonymous connections
    user_id: Option<UserId>,
    registry: ConnectionRegistry,
    fanout: EventFanout,
    presence: PresenceService,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        user_id: Option<UserId>,
        registry: ConnectionRegistry,
        fanout: EventFanout,
        presence: PresenceService,
        metrics: Metrics,
    ) -> Self {
        Self {
            connection_id,
            user_id,
            registry,
            fanout,
            presence,
            metrics,
        }
    }

    /// Handle the connection lifecycle.
    ///
    /// `tx`/`rx` are the connection's outbound queue; `tx` is already known to
    /// the registry when the user is identified. The connection is
    /// unregistered before this returns.
    pub async fn handle(
        self,
        socket: WebSocket,
        tx: mpsc::Sender<ServerEvent>,
        mut rx: mpsc::Receiver<ServerEvent>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        info!(
            "WebSocket connection {} established ({})",
            self.connection_id,
            self.user_id
                .map(|id| format!("user {id}"))
                .unwrap_or_else(|| "anonymous".to_string())
        );
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Writer: drains the outbound queue into text frames
        let writer_metrics = self.metrics.clone();
        let connection_id = self.connection_id;
        let send_task = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let text = match serde_json::to_string(&event) {
                    Ok(text) => text,
                    Err(e) => {
                        error!("Failed to serialize {} for {connection_id}: {e}", event.name());
                        continue;
                    }
                };
                if ws_sender.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
                writer_metrics.message_sent(event.name());
            }
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            self.handle_text(text.as_str(), &tx).await;
                        }
                        Some(Ok(Message::Binary(_))) => {
                            self.reply_error(&tx, &WsError::InvalidMessage {
                                message: "Binary frames are not supported".to_string(),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                        Some(Ok(_)) => {
                            // Ping/pong are answered by the transport
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error on connection {}: {}", self.connection_id, e);
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        // Cleanup: the registry holds a clone of `tx`, so unregister before
        // waiting for the writer to drain.
        if let Some(change) = self.registry.unregister(self.connection_id) {
            self.fanout.announce(change);
        }
        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Malformed or failed messages are answered with an `error` event;
    /// the connection stays open.
    async fn handle_text(&self, text: &str, tx: &mpsc::Sender<ServerEvent>) {
        let Some(user_id) = self.user_id else {
            debug!(
                "Ignoring message from anonymous connection {}",
                self.connection_id
            );
            return;
        };

        let message: ClientMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                self.metrics.message_received("invalid");
                self.reply_error(
                    tx,
                    &WsError::InvalidMessage {
                        message: format!("Unrecognized message: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                    },
                );
                return;
            }
        };

        self.metrics.message_received(message.name());
        let span = create_request_span(&self.connection_id, user_id, message.name());

        match message {
            ClientMessage::PresenceUpdate(update) => {
                let result = self
                    .presence
                    .update_presence(user_id, &update)
                    .instrument(span)
                    .await;

                match result {
                    Ok(_) => self.reply(
                        tx,
                        ServerEvent::PresenceAck {
                            workspace_id: update.workspace_id,
                        },
                    ),
                    Err(e) => self.reply_error(tx, &e),
                }
            }
        }
    }

    fn reply_error(&self, tx: &mpsc::Sender<ServerEvent>, error: &WsError) {
        debug!("Connection {} error: {}", self.connection_id, error);
        self.metrics.error_occurred(error.error_code());
        self.reply(tx, error.to_event());
    }

    fn reply(&self, tx: &mpsc::Sender<ServerEvent>, event: ServerEvent) {
        if let Err(e) = tx.try_send(event) {
            warn!(
                "Dropped reply for connection {}: {}",
                self.connection_id, e
            );
        }
    }
}
