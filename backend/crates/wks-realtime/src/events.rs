//! JSON frames exchanged over the real-time transport.
//!
//! Every frame is `{"event": "<name>", "data": {...}}`.

use wks_core::{ActivityEntry, UserId, WorkspaceId};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Events pushed from the server to a connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    #[serde(rename = "userOnline")]
    UserOnline { user_id: UserId },

    #[serde(rename = "userOffline")]
    UserOffline { user_id: UserId },

    #[serde(rename = "activity")]
    Activity(ActivityEntry),

    #[serde(rename = "presence:ack")]
    PresenceAck { workspace_id: WorkspaceId },

    #[serde(rename = "error")]
    Error { code: String, message: String },
}

impl ServerEvent {
    /// Wire name, also used as a metrics label
    pub fn name(&self) -> &'static str {
        match self {
            Self::UserOnline { .. } => "userOnline",
            Self::UserOffline { .. } => "userOffline",
            Self::Activity(_) => "activity",
            Self::PresenceAck { .. } => "presence:ack",
            Self::Error { .. } => "error",
        }
    }
}

/// Messages a client may send
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "presence:update")]
    PresenceUpdate(PresenceUpdate),
}

impl ClientMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PresenceUpdate(_) => "presence:update",
        }
    }
}

/// A client's report of where it is. Also the body of `POST /presence/update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceUpdate {
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub current_page: Option<String>,
    /// Opaque session payload, persisted as-is
    #[serde(default)]
    pub activity: Option<Value>,
}
