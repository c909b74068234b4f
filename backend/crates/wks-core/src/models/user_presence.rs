use crate::{UserId, WorkspaceId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single user's persisted presence joined with the workspace display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPresence {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub workspace_name: String,
    pub current_page: Option<String>,
    pub last_activity: DateTime<Utc>,
    pub is_online: bool,
    pub session_data: Option<Value>,
}
