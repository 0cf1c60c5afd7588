//! Threadsift Ingest Layer
//!
//! Normalizes a heterogeneous collection of raw records into canonical
//! [`Post`] values. Input records arrive in one of two shapes: "wrapped"
//! (`{kind, data}`, with the payload nested under `data`) or flat
//! dictionaries used as-is. Anything that is not a dictionary is dropped
//! silently; malformed entries never fail the batch.
//!
//! This crate performs no I/O. The orchestrator reads the collection and
//! hands the parsed values in.

pub mod fields;
pub mod record;

use serde_json::Value;
use threadsift_domain::Post;
use tracing::debug;

/// Normalize a raw record collection into canonical posts.
///
/// Non-dictionary entries and wrapped entries with a non-dictionary
/// payload are excluded, not failed.
pub fn normalize(records: &[Value]) -> Vec<Post> {
    let posts: Vec<Post> = records
        .iter()
        .filter_map(record::unwrap_record)
        .map(|raw| Post {
            id: fields::string_field(raw, "id"),
            author: fields::string_field(raw, "author"),
            subreddit: fields::string_field(raw, "subreddit"),
            date: fields::extract_date(raw),
            text: fields::extract_text(raw),
        })
        .collect();

    debug!(
        input = records.len(),
        normalized = posts.len(),
        "normalized record collection"
    );

    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_wrapped_and_flat_records() {
        let records = vec![
            json!({"kind": "t3", "data": {"id": "a1", "author": "alice", "subreddit": "rust", "title": "hello"}}),
            json!({"id": "b2", "author": "bob", "subreddit": "rust", "title": "world"}),
        ];
        let posts = normalize(&records);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "a1");
        assert_eq!(posts[0].author, "alice");
        assert_eq!(posts[1].id, "b2");
        assert_eq!(posts[1].text, "world");
    }

    #[test]
    fn drops_non_dictionary_entries() {
        let records = vec![
            json!("not a record"),
            json!(42),
            json!(null),
            json!(["nested", "array"]),
            json!({"id": "ok", "author": "alice"}),
        ];
        let posts = normalize(&records);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "ok");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let posts = normalize(&[json!({})]);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "");
        assert_eq!(posts[0].author, "");
        assert_eq!(posts[0].subreddit, "");
        assert_eq!(posts[0].date, "");
        assert_eq!(posts[0].text, "");
        assert!(!posts[0].has_date());
        assert!(!posts[0].has_text());
    }
}
