#![allow(dead_code)]

//! Test infrastructure for wks-server API tests

use wks_config::ActivityConfig;
use wks_core::WorkspaceMember;
use wks_db::WorkspaceMemberRepository;
use wks_realtime::{AppState, ConnectionConfig, ShutdownCoordinator};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = wks_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        pool,
        None,
        ConnectionConfig::default(),
        ActivityConfig {
            default_page_size: 2,
            max_page_size: 3,
        },
        ShutdownCoordinator::new(),
    )
}

pub async fn create_test_user(pool: &SqlitePool, user_id: i64, name: &str) {
    sqlx::query("INSERT INTO users (id, name, email) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(format!("user-{}@example.com", user_id))
        .execute(pool)
        .await
        .expect("Failed to create test user");
}

pub async fn create_test_workspace(pool: &SqlitePool, workspace_id: i64, owner_id: i64) {
    sqlx::query("INSERT INTO workspaces (id, name, owner_id) VALUES (?, ?, ?)")
        .bind(workspace_id)
        .bind(format!("Workspace {workspace_id}"))
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

/// Users 1..=`user_count`, all members of `workspace_id`
pub async fn seed_workspace(pool: &SqlitePool, workspace_id: i64, user_count: i64) {
    for user_id in 1..=user_count {
        create_test_user(pool, user_id, &format!("User {user_id}")).await;
    }
    create_test_workspace(pool, workspace_id, 1).await;
    for user_id in 1..=user_count {
        add_test_member(pool, workspace_id, user_id).await;
    }
}

/// Send one request through the router and decode the JSON body (Null if empty)
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    user_id: Option<i64>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-Id", user_id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}
