use wks_realtime::{PresenceUpdate, ServerEvent};

use std::time::Duration;

use axum_test::{TestServer, TestWebSocket};
use serde_json::json;

const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// WebSocket test client speaking the JSON event protocol
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect with `token` (user id or JWT) and an optional workspace
    pub async fn connect(server: &TestServer, token: Option<&str>, workspace_id: Option<i64>) -> Self {
        let mut params = Vec::new();
        if let Some(token) = token {
            params.push(format!("token={token}"));
        }
        if let Some(workspace_id) = workspace_id {
            params.push(format!("workspace_id={workspace_id}"));
        }
        let path = if params.is_empty() {
            "/ws".to_string()
        } else {
            format!("/ws?{}", params.join("&"))
        };

        let ws = server.get_websocket(&path).await.into_websocket().await;
        Self { ws }
    }

    /// Connect as `user_id` (auth disabled) and consume the own `userOnline` event
    pub async fn connect_as(server: &TestServer, user_id: i64) -> Self {
        let mut client = Self::connect(server, Some(&user_id.to_string()), None).await;
        client.expect_event(ServerEvent::UserOnline { user_id }).await;
        client
    }

    pub async fn send_presence_update(&mut self, update: &PresenceUpdate) {
        self.ws
            .send_json(&json!({ "event": "presence:update", "data": update }))
            .await;
    }

    pub async fn send_text(&mut self, text: &str) {
        self.ws.send_text(text).await;
    }

    /// Next event; panics after a few seconds of silence
    pub async fn receive_event(&mut self) -> ServerEvent {
        tokio::time::timeout(RECEIVE_TIMEOUT, self.ws.receive_json::<ServerEvent>())
            .await
            .expect("Timed out waiting for event")
    }

    /// Next event within `wait`, or `None`
    pub async fn try_receive_event(&mut self, wait: Duration) -> Option<ServerEvent> {
        tokio::time::timeout(wait, self.ws.receive_json::<ServerEvent>())
            .await
            .ok()
    }

    pub async fn expect_event(&mut self, expected: ServerEvent) {
        let event = self.receive_event().await;
        assert_eq!(event, expected);
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
