use serde::Serialize;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};

use crate::survey::repo::SurveyEntry;

/// Timestamp shape the forecasting service expects for its `ds` field.
const DS_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// One point of the time series the forecasting service consumes.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub ds: String,
    pub y: i32,
}

impl From<&SurveyEntry> for SeriesPoint {
    fn from(entry: &SurveyEntry) -> Self {
        let ds = entry
            .date_taken
            .to_offset(UtcOffset::UTC)
            .format(DS_FORMAT)
            .expect("formatting a timestamp with a fixed description");
        Self {
            ds,
            y: entry.rating,
        }
    }
}

/// Body for the prediction endpoint.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub data: Vec<SeriesPoint>,
    pub periods: u32,
}

/// Body for the staffing endpoint. `day` is the English weekday name.
#[derive(Debug, Serialize)]
pub struct StaffingRequest {
    pub max_staff: i32,
    pub day: String,
}

/// English weekday name for the current local day. Falls back to UTC when the
/// local offset cannot be determined (time refuses it in multithreaded
/// processes).
pub fn current_weekday_name() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.weekday().to_string()
}
