use crate::{UserId, WorkspaceId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Last-known presence of one user in one workspace, as persisted.
///
/// `is_online` is whatever was last written and may be stale: nothing
/// writes it back to `false` when a connection drops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceRecord {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub current_page: Option<String>,
    pub last_activity: DateTime<Utc>,
    pub is_online: bool,
    pub session_data: Option<Value>,
}

impl PresenceRecord {
    /// Record produced by an explicit presence update: always online, active now.
    pub fn touched(
        user_id: UserId,
        workspace_id: WorkspaceId,
        current_page: Option<String>,
        session_data: Option<Value>,
    ) -> Self {
        Self {
            user_id,
            workspace_id,
            current_page,
            last_activity: Utc::now(),
            is_online: true,
            session_data,
        }
    }
}
