use wks_config::Config;
use wks_config::WebSocketConfig;

/// Per-connection transport settings
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outbound events queued per connection before new ones are dropped
    pub send_buffer_size: usize,
    /// Live sockets accepted before handshakes are refused
    pub max_connections: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: WebSocketConfig::default().send_buffer_size,
            max_connections: 10000,
        }
    }
}

impl From<&Config> for ConnectionConfig {
    fn from(config: &Config) -> Self {
        Self {
            send_buffer_size: config.websocket.send_buffer_size,
            max_connections: config.server.max_connections,
        }
    }
}
