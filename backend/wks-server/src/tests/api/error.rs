use crate::ApiError;

use wks_core::CoreError;
use wks_db::DbError;
use wks_realtime::WsError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;

async fn body_json(error: ApiError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_code() {
    // Given
    let error = ApiError::NotFound {
        message: "No presence for user 3".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"].as_str(), some(eq("NOT_FOUND")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(eq("No presence for user 3"))
    );
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    // Given
    let error = ApiError::Validation {
        message: "Page too long".into(),
        field: Some("currentPage".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"].as_str(), some(eq("currentPage")));
}

#[tokio::test]
async fn given_forbidden_when_rendered_then_403() {
    let (status, json) = body_json(ApiError::forbidden("not a member")).await;

    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"]["code"].as_str(), some(eq("FORBIDDEN")));
}

#[tokio::test]
async fn given_unauthorized_when_rendered_then_401() {
    let (status, json) = body_json(ApiError::unauthorized("Missing header")).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"]["code"].as_str(), some(eq("UNAUTHORIZED")));
}

#[tokio::test]
async fn given_database_error_when_converted_then_generic_500() {
    // Given
    let db_error = DbError::Initialization {
        message: "disk /var/secret is full".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(ApiError::from(db_error)).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(not(contains_substring("/var/secret")))
    );
}

#[test]
fn given_ws_persistence_error_when_converted_then_internal() {
    let ws_error = WsError::from(DbError::Migration {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let api_error = ApiError::from(ws_error);

    assert!(matches!(api_error, ApiError::Internal { .. }));
}

#[test]
fn given_ws_not_found_when_converted_then_not_found() {
    let ws_error = WsError::NotFound {
        message: "No presence for user 9".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(ws_error);

    assert!(matches!(api_error, ApiError::NotFound { ref message, .. } if message == "No presence for user 9"));
}

#[tokio::test]
async fn given_ws_forbidden_when_converted_then_403_with_message() {
    // Given
    let ws_error = WsError::Forbidden {
        message: "User 3 is not a member of workspace 7".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = body_json(ApiError::from(ws_error)).await;

    // Then
    assert_that!(status, eq(StatusCode::FORBIDDEN));
    assert_that!(json["error"]["code"].as_str(), some(eq("FORBIDDEN")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(eq("User 3 is not a member of workspace 7"))
    );
}

#[test]
fn given_core_validation_error_when_converted_then_field_kept() {
    let core_error = CoreError::Validation {
        message: "Action must not be empty".into(),
        field: Some("action".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error = ApiError::from(core_error);

    assert!(matches!(
        api_error,
        ApiError::Validation { field: Some(ref field), .. } if field == "action"
    ));
}
