use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::domain::market_data::Timestamp;

const DAY_SECS: u64 = 86_400;

/// Format a timestamp for the time axis according to the visible span,
/// using UTC components.
///
/// - span below 2 days -> `HH:MM`
/// - span below 90 days -> `DD.MM`
/// - anything wider -> `MM.YYYY`
pub fn format_time_label(timestamp: Timestamp, span_secs: u64) -> String {
    let Some(date) = DateTime::<Utc>::from_timestamp(timestamp.value() as i64, 0) else {
        return "--".to_string();
    };
    if span_secs < 2 * DAY_SECS {
        format!("{:02}:{:02}", date.hour(), date.minute())
    } else if span_secs < 90 * DAY_SECS {
        format!("{:02}.{:02}", date.day(), date.month())
    } else {
        format!("{:02}.{}", date.month(), date.year())
    }
}
