use crate::{
    ConnectionId, ConnectionRegistry, DeliveryReport, DeliveryStats, Metrics, PresenceChange,
    Result as WsErrorResult, ServerEvent,
};

use wks_core::WorkspaceId;
use wks_db::WorkspaceMemberRepository;

use log::{debug, warn};
use sqlx::SqlitePool;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Best-effort push of events to live connections.
///
/// Pushes never wait: a connection whose outbound queue is full or closed
/// loses the event, and the drop is counted. Nothing is retried or stored.
#[derive(Clone)]
pub struct EventFanout {
    pool: SqlitePool,
    registry: ConnectionRegistry,
    stats: DeliveryStats,
    metrics: Metrics,
}

impl EventFanout {
    pub fn new(
        pool: SqlitePool,
        registry: ConnectionRegistry,
        stats: DeliveryStats,
        metrics: Metrics,
    ) -> Self {
        Self {
            pool,
            registry,
            stats,
            metrics,
        }
    }

    /// Deliver `event` to every live connection of every member of `workspace_id`.
    ///
    /// Members without a live connection are skipped silently. Fails only
    /// when the membership lookup fails.
    pub async fn notify(
        &self,
        workspace_id: WorkspaceId,
        event: &ServerEvent,
    ) -> WsErrorResult<DeliveryReport> {
        let members = WorkspaceMemberRepository::new(self.pool.clone())
            .member_user_ids(workspace_id)
            .await?;

        self.metrics.fanout_invoked("workspace");

        let mut report = DeliveryReport::default();
        for user_id in members {
            for (connection_id, sender) in self.registry.senders_for(user_id) {
                self.deliver(connection_id, &sender, event, &mut report);
            }
        }

        debug!(
            "Fan-out of {} to workspace {workspace_id}: {}/{} delivered",
            event.name(),
            report.delivered,
            report.attempted
        );

        Ok(report)
    }

    /// Deliver `event` to every registered connection.
    pub fn broadcast(&self, event: &ServerEvent) -> DeliveryReport {
        self.metrics.fanout_invoked("global");

        let mut report = DeliveryReport::default();
        for (connection_id, sender) in self.registry.all_senders() {
            self.deliver(connection_id, &sender, event, &mut report);
        }
        report
    }

    /// Broadcast an online/offline transition to everyone.
    pub fn announce(&self, change: PresenceChange) -> DeliveryReport {
        self.metrics.users_online(self.registry.online_user_count());
        self.broadcast(&change.to_event())
    }

    fn deliver(
        &self,
        connection_id: ConnectionId,
        sender: &mpsc::Sender<ServerEvent>,
        event: &ServerEvent,
        report: &mut DeliveryReport,
    ) {
        report.attempted += 1;

        match sender.try_send(event.clone()) {
            Ok(()) => {
                report.delivered += 1;
                self.stats.record_delivered();
                self.metrics.event_delivered(event.name());
            }
            Err(TrySendError::Full(_)) => {
                report.dropped += 1;
                self.stats.record_queue_full();
                self.metrics.event_dropped("queue_full");
                warn!(
                    "Dropped {} for connection {connection_id}: outbound queue full",
                    event.name()
                );
            }
            Err(TrySendError::Closed(_)) => {
                report.dropped += 1;
                self.stats.record_closed();
                self.metrics.event_dropped("closed");
                warn!(
                    "Dropped {} for connection {connection_id}: connection closing",
                    event.name()
                );
            }
        }
    }
}
