use wks_core::UserPresence;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserPresenceResponse {
    pub presence: UserPresence,
}
