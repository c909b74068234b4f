use wks_core::{NewActivity, WorkspaceMember};
use wks_db::WorkspaceMemberRepository;

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::SqlitePool;

/// Activity created `offset_secs` relative to now (negative = in the past)
pub fn create_test_activity_at(
    workspace_id: i64,
    user_id: i64,
    action: &str,
    offset_secs: i64,
) -> NewActivity {
    let mut activity = NewActivity::new(
        workspace_id,
        user_id,
        action,
        Some(json!({ "source": "test" })),
    )
    .expect("valid test activity");
    activity.created_at = Utc::now() + Duration::seconds(offset_secs);
    activity
}

pub async fn add_test_member(pool: &SqlitePool, workspace_id: i64, user_id: i64) {
    WorkspaceMemberRepository::new(pool.clone())
        .add(&WorkspaceMember::new(workspace_id, user_id, "member"))
        .await
        .expect("Failed to add test member");
}
