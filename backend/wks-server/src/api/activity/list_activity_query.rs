use wks_config::ActivityConfig;

use serde::Deserialize;

/// `?limit=&offset=` on activity reads
#[derive(Debug, Default, Deserialize)]
pub struct ListActivityQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListActivityQuery {
    /// Effective `(limit, offset)`: limit within `[1, max_page_size]`, offset >= 0.
    pub fn page(&self, config: &ActivityConfig) -> (i64, i64) {
        let limit = config.clamp_limit(self.limit);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}
