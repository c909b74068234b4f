use crate::{UserId, WorkspaceId};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one online user as seen by the in-memory connection registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LivePresence {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub current_page: Option<String>,
    pub last_activity: DateTime<Utc>,
}
