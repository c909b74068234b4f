use crate::ConnectionId;

use tracing::{Span, info_span};

/// Span wrapping the handling of one inbound real-time message.
///
/// Without a `tracing` subscriber the span is emitted as a `log` record at
/// `info`, so it lands wherever the process logger writes.
pub fn create_request_span(connection_id: &ConnectionId, user_id: i64, event: &str) -> Span {
    info_span!(
        "ws_request",
        connection_id = %connection_id,
        user_id = user_id,
        event = %event,
    )
}
