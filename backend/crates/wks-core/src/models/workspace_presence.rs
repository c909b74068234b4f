use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A presence row for a workspace joined with the user's display fields.
///
/// This is both the shape read from the store and the shape of a merged
/// entry once live registry state has been laid over it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePresence {
    pub user_id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
    pub current_page: Option<String>,
    pub last_activity: DateTime<Utc>,
    pub is_online: bool,
    pub session_data: Option<Value>,
}
