use crate::{ConnectionId, ServerEvent};

use wks_core::{UserId, WorkspaceId};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// One live connection as tracked by the registry
#[derive(Debug, Clone)]
pub struct ConnectionEntry {
    pub connection_id: ConnectionId,
    pub user_id: UserId,
    /// Workspace the connection last declared
    pub workspace_id: Option<WorkspaceId>,
    pub current_page: Option<String>,
    pub connected_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Outbound queue drained by the connection's writer task
    pub sender: mpsc::Sender<ServerEvent>,
    /// Registry-wide touch order, breaks `last_activity` ties
    pub(crate) sequence: u64,
}
