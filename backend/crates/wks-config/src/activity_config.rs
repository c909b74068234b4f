use crate::{ConfigError, ConfigErrorResult, DEFAULT_ACTIVITY_PAGE_SIZE, MAX_ACTIVITY_PAGE_SIZE};

use serde::Deserialize;

/// Paging limits for activity log reads
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_ACTIVITY_PAGE_SIZE,
            max_page_size: MAX_ACTIVITY_PAGE_SIZE,
        }
    }
}

impl ActivityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_page_size < 1 || self.max_page_size < 1 {
            return Err(ConfigError::activity(format!(
                "activity page sizes must be positive, got default={} max={}",
                self.default_page_size, self.max_page_size
            )));
        }

        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::activity(format!(
                "activity.default_page_size ({}) cannot exceed max_page_size ({})",
                self.default_page_size, self.max_page_size
            )));
        }

        Ok(())
    }

    /// Clamp a requested page size into `1..=max_page_size`
    pub fn clamp_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
            .max(1)
    }
}
