use metrics::{counter, gauge};

/// Metrics collector for the real-time layer
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "wks_realtime",
        }
    }

    /// Record new connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    pub fn connection_refused(&self, reason: &str) {
        counter!(format!("{}.connections.refused.{}", self.prefix, reason)).increment(1);
    }

    pub fn users_online(&self, count: usize) {
        gauge!(format!("{}.users.online", self.prefix)).set(count as f64);
    }

    /// Record message received from client
    pub fn message_received(&self, message_type: &str) {
        counter!(format!("{}.messages.received", self.prefix)).increment(1);
        counter!(format!(
            "{}.messages.received.{}",
            self.prefix, message_type
        ))
        .increment(1);
    }

    /// Record event written to a socket
    pub fn message_sent(&self, event: &str) {
        counter!(format!("{}.messages.sent", self.prefix)).increment(1);
        counter!(format!("{}.messages.sent.{}", self.prefix, event)).increment(1);
    }

    /// Event accepted by a connection's outbound queue
    pub fn event_delivered(&self, event: &str) {
        counter!(format!("{}.events.delivered", self.prefix)).increment(1);
        counter!(format!("{}.events.delivered.{}", self.prefix, event)).increment(1);
    }

    /// Event discarded, `reason` is `queue_full` or `closed`
    pub fn event_dropped(&self, reason: &str) {
        counter!(format!("{}.events.dropped", self.prefix)).increment(1);
        counter!(format!("{}.events.dropped.{}", self.prefix, reason)).increment(1);
    }

    /// `scope` is `workspace` or `global`
    pub fn fanout_invoked(&self, scope: &str) {
        counter!(format!("{}.fanout.{}", self.prefix, scope)).increment(1);
    }

    pub fn presence_merged(&self, suppressed_live: usize) {
        counter!(format!("{}.presence.merges", self.prefix)).increment(1);
        counter!(format!("{}.presence.suppressed_live", self.prefix))
            .increment(suppressed_live as u64);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_code)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
