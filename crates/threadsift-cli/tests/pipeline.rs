//! End-to-end pipeline runs against real files in a temp directory.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use threadsift_analysis::AnalysisConfig;
use threadsift_cli::Pipeline;
use threadsift_domain::{NetworkArtifact, OverviewArtifact};

fn write_json(dir: &Path, name: &str, value: Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

fn read_artifact<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> T {
    let raw = std::fs::read_to_string(dir.join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

/// A wrapped record and a flat record from two authors in one subreddit.
fn two_record_input() -> Value {
    json!([
        {
            "kind": "t3",
            "data": {
                "id": "p1",
                "author": "alice",
                "subreddit": "rust",
                "created_utc": 1704103200,
                "title": "a fine day for systems programming"
            }
        },
        {
            "id": "p2",
            "author": "bob",
            "subreddit": "rust",
            "date": "2024-01-01",
            "title": "borrow checker",
            "selftext": "it is great once it clicks"
        }
    ])
}

#[test]
fn two_records_produce_the_expected_overview_and_network() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", two_record_input());
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(input, None, out.clone(), AnalysisConfig::default());
    let summary = pipeline.run().unwrap();
    assert_eq!(summary.posts, 2);

    let overview: OverviewArtifact = read_artifact(&out, "overview.json");
    assert_eq!(overview.stats.total_posts, 2);
    assert_eq!(overview.stats.unique_authors, 2);
    assert_eq!(overview.stats.unique_subreddits, 1);

    // Two authors in the same (subreddit, date) bucket co-occur once,
    // below the default edge retention threshold of two.
    let network: NetworkArtifact = read_artifact(&out, "network.json");
    assert_eq!(network.nodes.len(), 2);
    assert!(network.links.is_empty());

    assert!(out.join("sentiment.json").exists());
}

#[test]
fn deleted_authors_are_excluded_from_author_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(
        dir.path(),
        "input.json",
        json!([
            {"id": "p1", "author": "[deleted]", "subreddit": "rust", "date": "2024-01-01", "title": "gone"},
            {"id": "p2", "author": "carol", "subreddit": "rust", "date": "2024-01-01", "title": "still here"}
        ]),
    );
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(input, None, out.clone(), AnalysisConfig::default());
    pipeline.run().unwrap();

    let overview: OverviewArtifact = read_artifact(&out, "overview.json");
    assert_eq!(overview.stats.total_posts, 2);
    assert_eq!(overview.stats.unique_authors, 1);
    assert_eq!(overview.top_authors.len(), 1);
    assert_eq!(overview.top_authors[0].author, "carol");
}

#[test]
fn no_events_means_no_correlations_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", two_record_input());
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(input, None, out.clone(), AnalysisConfig::default());
    let summary = pipeline.run().unwrap();

    assert!(!out.join("correlations.json").exists());
    assert!(summary
        .skipped
        .contains(&"event correlation".to_string()));
}

#[test]
fn empty_events_file_means_no_correlations_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", two_record_input());
    let events = write_json(dir.path(), "events.json", json!([]));
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(input, Some(events), out.clone(), AnalysisConfig::default());
    pipeline.run().unwrap();

    assert!(!out.join("correlations.json").exists());
}

#[test]
fn dated_events_produce_a_correlations_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", two_record_input());
    let events = write_json(
        dir.path(),
        "events.json",
        json!([{"date": "2024-01-01", "label": "launch"}]),
    );
    let out = dir.path().join("out");

    let pipeline = Pipeline::new(input, Some(events), out.clone(), AnalysisConfig::default());
    pipeline.run().unwrap();

    let correlations: Value = read_artifact(&out, "correlations.json");
    let records = correlations.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["event"]["label"], "launch");
    assert_eq!(records[0]["metrics"]["volume"], 2);
}

#[test]
fn two_runs_write_byte_identical_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "input.json", two_record_input());
    let first = dir.path().join("first");
    let second = dir.path().join("second");

    Pipeline::new(input.clone(), None, first.clone(), AnalysisConfig::default())
        .run()
        .unwrap();
    Pipeline::new(input, None, second.clone(), AnalysisConfig::default())
        .run()
        .unwrap();

    for entry in std::fs::read_dir(&first).unwrap() {
        let name = entry.unwrap().file_name();
        let a = std::fs::read(first.join(&name)).unwrap();
        let b = std::fs::read(second.join(&name)).unwrap();
        assert_eq!(a, b, "artifact {:?} differs between runs", name);
    }
}
