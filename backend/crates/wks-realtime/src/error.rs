use crate::ServerEvent;

use wks_auth::AuthError;
use wks_core::CoreError;
use wks_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Persistence failed: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    ValidationError {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl WsError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidMessage { .. } => "INVALID_MESSAGE",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message safe to show a client; store and internal details stay in the log
    pub fn client_message(&self) -> String {
        match self {
            Self::Persistence { .. } | Self::Internal { .. } | Self::Serialization { .. } => {
                "The request could not be completed".to_string()
            }
            Self::NotFound { message, .. }
            | Self::InvalidMessage { message, .. }
            | Self::ValidationError { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. } => message.clone(),
            Self::ConnectionClosed { reason, .. } => reason.clone(),
        }
    }

    /// `error` event for the client
    pub fn to_event(&self) -> ServerEvent {
        ServerEvent::Error {
            code: self.error_code().to_string(),
            message: self.client_message(),
        }
    }
}

impl From<DbError> for WsError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for WsError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation {
                message,
                field,
                location,
            } => Self::ValidationError {
                message,
                field,
                location,
            },
            CoreError::InvalidTimestamp { value, location } => Self::Internal {
                message: format!("Invalid timestamp: {value}"),
                location,
            },
        }
    }
}

impl From<AuthError> for WsError {
    #[track_caller]
    fn from(error: AuthError) -> Self {
        Self::Unauthorized {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
