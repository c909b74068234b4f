use crate::{Result as CoreResult, UserId, WorkspaceId, validate_action};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An appended activity log row. There is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: i64,
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub action: String,
    pub details: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// An activity that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub workspace_id: WorkspaceId,
    pub user_id: UserId,
    pub action: String,
    pub details: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl NewActivity {
    /// Build a validated activity stamped with the current time.
    #[track_caller]
    pub fn new(
        workspace_id: WorkspaceId,
        user_id: UserId,
        action: impl Into<String>,
        details: Option<Value>,
    ) -> CoreResult<Self> {
        let action = action.into().trim().to_string();
        validate_action(&action)?;

        Ok(Self {
            workspace_id,
            user_id,
            action,
            details,
            created_at: Utc::now(),
        })
    }

    pub fn into_entry(self, id: i64) -> ActivityEntry {
        ActivityEntry {
            id,
            workspace_id: self.workspace_id,
            user_id: self.user_id,
            action: self.action,
            details: self.details,
            created_at: self.created_at,
        }
    }
}
