use wks_core::ActivityEntry;
use wks_realtime::{DeliveryReport, RecordedActivity};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub activity: ActivityEntry,
    pub delivery: DeliveryReport,
}

impl From<RecordedActivity> for ActivityResponse {
    fn from(recorded: RecordedActivity) -> Self {
        Self {
            activity: recorded.entry,
            delivery: recorded.delivery,
        }
    }
}
