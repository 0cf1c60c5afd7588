//! Record shape classification - wrapped vs. flat input entries

use serde_json::{Map, Value};

/// Resolve one raw entry to its record dictionary.
///
/// A "wrapped" entry carries both a `kind` field and a nested `data`
/// payload; the payload is unwrapped and used. Any other dictionary is
/// "flat" and used as-is. Non-dictionary entries (and wrapped entries
/// whose payload is not a dictionary) resolve to `None`.
///
/// This is the only place the pipeline branches on input shape.
pub fn unwrap_record(entry: &Value) -> Option<&Map<String, Value>> {
    let object = entry.as_object()?;
    if object.contains_key("kind") {
        if let Some(data) = object.get("data") {
            return data.as_object();
        }
    }
    Some(object)
}
