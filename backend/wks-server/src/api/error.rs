//! REST API error types
//!
//! Every error renders as `{"error": {"code", "message", "field"?}}` with a
//! matching HTTP status.

use wks_core::CoreError;
use wks_db::DbError;
use wks_realtime::WsError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 500, message is safe to show
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn database_failure() -> Self {
        Self::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Forbidden { message, .. } => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.to_string(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Database details are logged, never returned
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);
        ApiError::database_failure()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidTimestamp { .. } => ApiError::Internal {
                message: "Invalid stored timestamp".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<WsError> for ApiError {
    #[track_caller]
    fn from(e: WsError) -> Self {
        match e {
            WsError::NotFound { message, .. } => ApiError::NotFound {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            WsError::ValidationError { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            WsError::InvalidMessage { message, .. } => ApiError::Validation {
                message,
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
            WsError::Unauthorized { message, .. } => ApiError::Unauthorized {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            WsError::Forbidden { message, .. } => ApiError::Forbidden {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            WsError::Persistence { source, .. } => ApiError::from(source),
            other => {
                log::error!("Real-time layer error: {}", other);
                ApiError::Internal {
                    message: other.client_message(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
