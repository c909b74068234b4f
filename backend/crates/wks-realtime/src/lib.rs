pub mod activity_recorder;
pub mod app_state;
pub mod connection_config;
pub mod connection_entry;
pub mod connection_id;
pub mod connection_limits;
pub mod connection_registry;
pub mod delivery_stats;
pub mod error;
pub mod events;
pub mod fan_out;
pub mod handshake;
pub mod metrics;
pub mod presence_service;
pub mod presence_state;
pub mod request_logging;
pub mod shutdown;
pub mod web_socket_connection;

pub use activity_recorder::{ActivityRecorder, RecordedActivity};
pub use app_state::{AppState, handler};
pub use connection_config::ConnectionConfig;
pub use connection_entry::ConnectionEntry;
pub use connection_id::ConnectionId;
pub use connection_limits::{ConnectionLimits, ConnectionSlot};
pub use connection_registry::ConnectionRegistry;
pub use delivery_stats::{DeliveryReport, DeliverySnapshot, DeliveryStats};
pub use error::{Result, WsError};
pub use events::{ClientMessage, PresenceUpdate, ServerEvent};
pub use fan_out::EventFanout;
pub use handshake::{HandshakeQuery, resolve_identity};
pub use metrics::Metrics;
pub use presence_service::PresenceService;
pub use presence_state::{PresenceChange, PresenceState, PresenceTransition};
pub use request_logging::create_request_span;
pub use shutdown::{ShutdownCoordinator, ShutdownGuard};
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
