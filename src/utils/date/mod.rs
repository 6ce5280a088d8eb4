// Date utility functions
// Hour-boundary truncation used by the display timeline

use chrono::{DateTime, Duration, Local, Timelike};

/// Truncate a timestamp to the top of its own hour (minutes and seconds zeroed).
pub fn start_of_hour(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(date.hour(), 0, 0)
        .unwrap()
        .and_local_timezone(date.timezone())
        .unwrap()
}

/// Top of the hour one hour before `date`.
pub fn start_of_previous_hour(date: DateTime<Local>) -> DateTime<Local> {
    start_of_hour(date - Duration::hours(1))
}
