use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations applied.
pub async fn create_test_pool() -> SqlitePool {
    wks_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user row so presence joins have display fields.
pub async fn create_test_user(pool: &SqlitePool, user_id: i64, name: &str) {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
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
