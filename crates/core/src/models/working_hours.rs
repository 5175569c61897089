use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Open/close pair for one weekday, stored as UTC times-of-day.
///
/// A weekday without a record means the business is closed that day. The
/// pair must not cross UTC midnight (`start < end`); overnight hours are
/// not supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub business_id: Uuid,
    pub weekday: Weekday,
    pub start_time_utc: NaiveTime,
    pub end_time_utc: NaiveTime,
}

/// Upsert request carrying local wall-clock times plus the zone they are
/// expressed in. Conversion to UTC happens server side, anchored to the
/// current date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertWorkingHoursRequest {
    pub weekday: Weekday,
    pub start_local: String,
    pub end_local: String,
    pub timezone: String,
}
