use wks_core::WorkspaceId;
use wks_realtime::PresenceUpdate;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePresenceRequest {
    pub workspace_id: WorkspaceId,
    #[serde(default)]
    pub current_page: Option<String>,
    #[serde(default)]
    pub activity: Option<Value>,
}

impl From<UpdatePresenceRequest> for PresenceUpdate {
    fn from(req: UpdatePresenceRequest) -> Self {
        Self {
            workspace_id: req.workspace_id,
            current_page: req.current_page,
            activity: req.activity,
        }
    }
}
