use crate::{DeliveryReport, EventFanout, Result as WsErrorResult, ServerEvent};

use wks_core::{ActivityEntry, NewActivity, UserId, WorkspaceId};
use wks_db::ActivityLogRepository;

use log::{error, info, warn};
use serde_json::Value;
use sqlx::SqlitePool;

/// Appends to the activity log, then fans the entry out to the workspace.
#[derive(Clone)]
pub struct ActivityRecorder {
    pool: SqlitePool,
    fanout: EventFanout,
}

#[derive(Debug, Clone)]
pub struct RecordedActivity {
    pub entry: ActivityEntry,
    pub delivery: DeliveryReport,
}

impl ActivityRecorder {
    pub fn new(pool: SqlitePool, fanout: EventFanout) -> Self {
        Self { pool, fanout }
    }

    /// A failed append is an error. A failed fan-out is logged and reported
    /// as zero deliveries; the entry stays written.
    pub async fn record(
        &self,
        workspace_id: WorkspaceId,
        user_id: UserId,
        action: &str,
        details: Option<Value>,
    ) -> WsErrorResult<RecordedActivity> {
        let activity = NewActivity::new(workspace_id, user_id, action, details)?;

        let entry = ActivityLogRepository::create(&self.pool, activity)
            .await
            .inspect_err(|e| {
                error!("Failed to append activity to workspace {workspace_id}: {e}")
            })?;

        info!(
            "Activity {} '{}' by user {user_id} in workspace {workspace_id}",
            entry.id, entry.action
        );

        let delivery = match self
            .fanout
            .notify(workspace_id, &ServerEvent::Activity(entry.clone()))
            .await
        {
            Ok(report) => report,
            Err(e) => {
                warn!("Fan-out of activity {} failed: {e}", entry.id);
                DeliveryReport::default()
            }
        };

        Ok(RecordedActivity { entry, delivery })
    }
}
