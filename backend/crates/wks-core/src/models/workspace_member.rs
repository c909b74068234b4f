use crate::{UserId, WorkspaceId};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl WorkspaceMember {
    pub fn new(workspace_id: WorkspaceId, user_id: UserId, role: &str) -> Self {
        Self {
            workspace_id,
            user_id,
            role: role.to_string(),
            joined_at: Utc::now(),
        }
    }
}
