use wks_core::ActivityEntry;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityListResponse {
    pub activities: Vec<ActivityEntry>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}
