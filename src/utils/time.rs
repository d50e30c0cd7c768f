use crate::constants::DATE_FORMAT;
use chrono::{Local, NaiveDate, Utc};

/// Current time in milliseconds since the epoch, sent as the `_dc` parameter
#[must_use]
pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's date in local time
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date as the portal expects it in `datGiorno`
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
