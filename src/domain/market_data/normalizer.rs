use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use super::value_objects::Timestamp;
use crate::domain::errors::{ChartError, ChartResult};

/// Magnitude threshold separating epoch millis from epoch seconds.
/// Values above it are millisecond counts and get divided down.
const MILLIS_THRESHOLD: f64 = 1e12;

/// Normalize a loosely-typed time value into the canonical [`Timestamp`].
///
/// Accepted representations:
/// - JSON number above `10^12` → epoch milliseconds
/// - other non-negative finite JSON number → epoch seconds (fraction truncated)
/// - JSON string → RFC 3339, or `"%Y-%m-%d %H:%M:%S"` taken as UTC
///
/// Anything non-finite, negative, or unparseable fails with
/// [`ChartError::InvalidTimestamp`]. Pure function, no side effects.
pub fn normalize_timestamp(raw: &Value) -> ChartResult<Timestamp> {
    match raw {
        Value::Number(number) => {
            let value = number
                .as_f64()
                .ok_or_else(|| ChartError::InvalidTimestamp(number.to_string()))?;
            from_epoch_number(value)
        }
        Value::String(text) => from_datetime_str(text),
        other => Err(ChartError::InvalidTimestamp(other.to_string())),
    }
}

fn from_epoch_number(value: f64) -> ChartResult<Timestamp> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidTimestamp(value.to_string()));
    }
    let seconds = if value > MILLIS_THRESHOLD {
        (value / 1000.0).trunc()
    } else {
        value.trunc()
    };
    Ok(Timestamp::from_secs(seconds as u64))
}

fn from_datetime_str(text: &str) -> ChartResult<Timestamp> {
    let seconds = DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.timestamp())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
                .map(|naive| naive.and_utc().timestamp())
        })
        .map_err(|_| ChartError::InvalidTimestamp(text.to_string()))?;

    if seconds < 0 {
        return Err(ChartError::InvalidTimestamp(text.to_string()));
    }
    Ok(Timestamp::from_secs(seconds as u64))
}

#[cfg(test)]
mod tests {
    use super::normalize_timestamp;
    use crate::domain::errors::ChartError;
    use serde_json::json;

    #[test]
    fn seconds_millis_and_iso_agree() {
        let from_secs = normalize_timestamp(&json!(1_700_000_000_u64)).unwrap();
        let from_millis = normalize_timestamp(&json!(1_700_000_000_123_u64)).unwrap();
        let from_iso = normalize_timestamp(&json!("2023-11-14T22:13:20Z")).unwrap();
        assert_eq!(from_secs, from_millis);
        assert_eq!(from_secs, from_iso);
        assert_eq!(from_secs.value(), 1_700_000_000);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!(
            normalize_timestamp(&json!(-5)),
            Err(ChartError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            normalize_timestamp(&json!("not a date")),
            Err(ChartError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            normalize_timestamp(&json!(null)),
            Err(ChartError::InvalidTimestamp(_))
        ));
    }
}
