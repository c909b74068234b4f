use wks_core::UserId;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineUsersResponse {
    pub user_ids: Vec<UserId>,
    pub count: usize,
}

impl From<Vec<UserId>> for OnlineUsersResponse {
    fn from(user_ids: Vec<UserId>) -> Self {
        Self {
            count: user_ids.len(),
            user_ids,
        }
    }
}
