use wks_core::PresenceRecord;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdatePresenceResponse {
    pub success: bool,
    pub presence: PresenceRecord,
}
