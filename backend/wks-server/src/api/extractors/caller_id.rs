//! Axum extractor for the caller's identity

use crate::ApiError;

use wks_core::UserId;
use wks_realtime::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Authenticated caller, read from the `X-User-Id` header.
///
/// A missing header or anything but a positive integer is rejected with 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerId(pub UserId);

impl FromRequestParts<AppState> for CallerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get(USER_ID_HEADER)
                .ok_or_else(|| ApiError::unauthorized(format!("Missing {USER_ID_HEADER} header")))?;

            let user_id = header_value
                .to_str()
                .ok()
                .and_then(|value| value.trim().parse::<UserId>().ok())
                .filter(|id| *id > 0)
                .ok_or_else(|| {
                    log::warn!("Invalid {} header: {:?}", USER_ID_HEADER, header_value);
                    ApiError::unauthorized(format!("Invalid {USER_ID_HEADER} header"))
                })?;

            Ok(CallerId(user_id))
        }
    }
}
