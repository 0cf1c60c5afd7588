//! Field extraction - date buckets and combined text from raw records

use chrono::{Local, TimeZone};
use serde_json::{Map, Value};

/// Fields probed for a creation date, in priority order.
const DATE_FIELDS: [&str; 3] = ["created_utc", "created", "date"];

/// Fields concatenated into the analyzable text.
const TEXT_FIELDS: [&str; 3] = ["title", "selftext", "body"];

/// Get a plain string field, defaulting to empty for absent or
/// non-string values.
pub fn string_field(record: &Map<String, Value>, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Derive the `YYYY-MM-DD` date bucket for a record.
///
/// The first usable date field wins: a numeric epoch is rendered in
/// local time; a string is truncated to its first 10 characters when
/// long enough, else used verbatim. A record with no usable date field
/// yields the empty string, meaning "unbucketable".
pub fn extract_date(record: &Map<String, Value>) -> String {
    let candidate = DATE_FIELDS
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| is_usable(value));

    match candidate {
        Some(Value::Number(n)) => epoch_to_date(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => {
            if s.chars().count() >= 10 {
                s.chars().take(10).collect()
            } else {
                s.clone()
            }
        }
        _ => String::new(),
    }
}

/// Combine title, self-text and body into one analyzable text field.
///
/// Absent or non-string values default to empty; the parts are joined
/// with single spaces and the result is trimmed. Empty output means
/// "no analyzable text".
pub fn extract_text(record: &Map<String, Value>) -> String {
    let parts: Vec<String> = TEXT_FIELDS
        .iter()
        .map(|key| string_field(record, key))
        .collect();
    format!("{} {} {}", parts[0], parts[1], parts[2])
        .trim()
        .to_string()
}

/// A date field is usable when it is a non-zero number or a non-empty
/// string. Zero epochs and empty strings fall through to the next field.
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        _ => false,
    }
}

/// Render epoch seconds as a local-time `YYYY-MM-DD` string.
fn epoch_to_date(epoch: f64) -> String {
    match Local.timestamp_opt(epoch as i64, 0).single() {
        Some(datetime) => datetime.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}
