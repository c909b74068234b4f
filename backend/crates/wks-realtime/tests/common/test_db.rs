use wks_core::WorkspaceMember;
use wks_db::WorkspaceMemberRepository;

use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied.
pub async fn create_test_pool() -> SqlitePool {
    wks_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_user(pool: &SqlitePool, user_id: i64, name: &str) {
    sqlx::query("INSERT INTO users (id, name, email, avatar_url) VALUES (?, ?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(format!("user-{}@example.com", user_id))
        .bind(format!("/avatars/{}.png", user_id))
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

pub async fn create_test_workspace(pool: &SqlitePool, workspace_id: i64, owner_id: i64, name: &str) {
    sqlx::query("INSERT INTO workspaces (id, name, owner_id) VALUES (?, ?, ?)")
        .bind(workspace_id)
        .bind(name)
        .bind(owner_id)
        .execute(pool)
        .await
        .expect("Failed to create test workspace");
}

pub async fn add_test_member(pool: &SqlitePool, workspace_id: i64, user_id: i64) {
    WorkspaceMemberRepository::new(pool.clone())
        .add(&WorkspaceMember::new(workspace_id, user_id, "member"))
        .await
        .expect("Failed to add test member");
}

/// Users 1..=`user_count` ("User N"), all members of workspace `workspace_id` owned by user 1.
pub async fn seed_workspace(pool: &SqlitePool, workspace_id: i64, user_count: i64) {
    for user_id in 1..=user_count {
        create_test_user(pool, user_id, &format!("User {user_id}")).await;
    }
    create_test_workspace(pool, workspace_id, 1, &format!("Workspace {workspace_id}")).await;
    for user_id in 1..=user_count {
        add_test_member(pool, workspace_id, user_id).await;
    }
}

/// Overwrite the persisted online flag, as a stale row would carry it.
pub async fn set_persisted_online(pool: &SqlitePool, user_id: i64, workspace_id: i64, online: bool) {
    sqlx::query("UPDATE user_presence SET is_online = ? WHERE user_id = ? AND workspace_id = ?")
        .bind(online)
        .bind(user_id)
        .bind(workspace_id)
        .execute(pool)
        .await
        .expect("Failed to update presence row");
}
