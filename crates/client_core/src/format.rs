//! Display strings for timestamps and dates.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Chat timestamp: clock time within the last day, otherwise month and day.
pub fn format_timestamp(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if now.signed_duration_since(timestamp) < Duration::hours(24) {
        timestamp.format("%I:%M %p").to_string()
    } else {
        timestamp.format("%b %-d").to_string()
    }
}

/// Request card date, e.g. "January 15, 2024 at 10:30 AM".
pub fn format_request_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %-d, %Y at %I:%M %p").to_string()
}

/// Profile "member since" line, e.g. "June 2023".
pub fn format_joined(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
