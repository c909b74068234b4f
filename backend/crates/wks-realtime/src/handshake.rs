use crate::{Result as WsErrorResult, WsError};

use wks_auth::JwtValidator;
use wks_core::{UserId, WorkspaceId};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Query string of `GET /ws`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HandshakeQuery {
    pub token: Option<String>,
    pub workspace_id: Option<WorkspaceId>,
}

/// Resolve the identity a handshake token stands for.
///
/// - no token: anonymous (`Ok(None)`), served but never registered
/// - auth disabled: the token is the numeric user id
/// - auth enabled: the token is a JWT whose `sub` is the user id
#[track_caller]
pub fn resolve_identity(
    token: Option<&str>,
    validator: Option<&JwtValidator>,
) -> WsErrorResult<Option<UserId>> {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    match validator {
        Some(validator) => {
            let claims = validator.validate(token)?;
            Ok(Some(claims.user_id()?))
        }
        None => match token.parse::<UserId>() {
            Ok(user_id) if user_id > 0 => Ok(Some(user_id)),
            _ => Err(WsError::Unauthorized {
                message: format!("Invalid user token: {token}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        },
    }
}
