use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

pub const MAX_ACTION_LENGTH: usize = 64;
pub const MAX_PAGE_LENGTH: usize = 512;

/// Activity tags are free-form but must be present and short.
#[track_caller]
pub fn validate_action(action: &str) -> CoreResult<()> {
    if action.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "action cannot be empty".to_string(),
            field: Some("action".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if action.chars().count() > MAX_ACTION_LENGTH {
        return Err(CoreError::Validation {
            message: format!("action exceeds {MAX_ACTION_LENGTH} characters"),
            field: Some("action".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

#[track_caller]
pub fn validate_current_page(page: Option<&str>) -> CoreResult<()> {
    if let Some(page) = page
        && page.chars().count() > MAX_PAGE_LENGTH
    {
        return Err(CoreError::Validation {
            message: format!("currentPage exceeds {MAX_PAGE_LENGTH} characters"),
            field: Some("currentPage".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
