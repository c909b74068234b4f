use crate::{AuthError, Result as AuthErrorResult};

use wks_core::UserId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims carried by the real-time handshake token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the numeric user id, as a string
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.user_id().map(|_| ())
    }

    /// The subject as a user id. Must be a positive integer.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<UserId> {
        match self.sub.trim().parse::<UserId>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: format!("sub must be a positive user id, got '{}'", self.sub),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
