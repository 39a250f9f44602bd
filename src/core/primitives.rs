use chrono::{DateTime, Utc};

/// Converts a UTC timestamp into the numeric time-axis domain (unix seconds).
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
