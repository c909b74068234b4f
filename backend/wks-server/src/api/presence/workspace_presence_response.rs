use wks_core::{MergedPresence, WorkspaceId, WorkspacePresence};

use serde::Serialize;

/// Merged presence view of one workspace
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePresenceResponse {
    pub workspace_id: WorkspaceId,
    pub users: Vec<WorkspacePresence>,
    pub online_count: usize,
    pub total_count: usize,
}

impl WorkspacePresenceResponse {
    pub fn new(workspace_id: WorkspaceId, merged: MergedPresence) -> Self {
        Self {
            workspace_id,
            users: merged.users,
            online_count: merged.online_count,
            total_count: merged.total_count,
        }
    }
}
