use crate::CallerId;

use wks_config::ActivityConfig;
use wks_realtime::{AppState, ConnectionConfig, ShutdownCoordinator};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;

async fn create_test_state() -> AppState {
    let pool = wks_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState::new(
        pool,
        None,
        ConnectionConfig::default(),
        ActivityConfig::default(),
        ShutdownCoordinator::new(),
    )
}

async fn extract(header: Option<&str>) -> crate::ApiResult<CallerId> {
    let state = create_test_state().await;
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("X-User-Id", value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    CallerId::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn given_numeric_header_when_extracted_then_caller_id() {
    let result = extract(Some("42")).await;

    assert_that!(result.ok(), some(eq(CallerId(42))));
}

#[tokio::test]
async fn given_missing_header_when_extracted_then_unauthorized() {
    let result = extract(None).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_non_numeric_header_when_extracted_then_unauthorized() {
    let result = extract(Some("alice")).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn given_zero_user_id_when_extracted_then_unauthorized() {
    let result = extract(Some("0")).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}
