//! Pipeline orchestration
//!
//! The only component that touches the filesystem. Reads the input
//! record collection, runs every analysis stage in sequence, and writes
//! one JSON artifact per stage into the output directory. A stage that
//! fails or declines to produce output is logged and skipped; its
//! artifact file is simply not written and the remaining stages still
//! run. Only an unreadable or malformed primary input aborts the run.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use threadsift_analysis::{
    compute_network, compute_overview, compute_semantic_map, compute_sentiment, compute_topics,
    correlate_events, AnalysisConfig, LexiconScorer,
};
use tracing::{info, warn};

/// Artifact filenames, fixed so downstream consumers can rely on them.
const OVERVIEW_FILE: &str = "overview.json";
const SENTIMENT_FILE: &str = "sentiment.json";
const TOPICS_FILE: &str = "topics.json";
const NETWORK_FILE: &str = "network.json";
const SEMANTIC_MAP_FILE: &str = "semantic_map.json";
const CORRELATIONS_FILE: &str = "correlations.json";

/// What a run produced, for reporting at exit.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Posts that survived normalization.
    pub posts: usize,
    /// Artifact files written, in stage order.
    pub artifacts: Vec<String>,
    /// Stages that were skipped instead of producing an artifact.
    pub skipped: Vec<String>,
}

/// One batch run over a record collection.
pub struct Pipeline {
    input: PathBuf,
    events: Option<PathBuf>,
    output: PathBuf,
    config: AnalysisConfig,
}

impl Pipeline {
    pub fn new(
        input: PathBuf,
        events: Option<PathBuf>,
        output: PathBuf,
        config: AnalysisConfig,
    ) -> Self {
        Self {
            input,
            events,
            output,
            config,
        }
    }

    /// Execute every stage and write the artifacts.
    pub fn run(&self) -> Result<RunSummary> {
        let records = self.read_records()?;
        let posts = threadsift_ingest::normalize(&records);
        info!(records = records.len(), posts = posts.len(), "input loaded");

        std::fs::create_dir_all(&self.output).with_context(|| {
            format!(
                "failed to create output directory {}",
                self.output.display()
            )
        })?;

        let mut summary = RunSummary {
            posts: posts.len(),
            ..RunSummary::default()
        };

        let overview = compute_overview(&posts);
        self.write_artifact(OVERVIEW_FILE, &overview, &mut summary)?;

        let scorer = LexiconScorer::new();
        let sentiment = compute_sentiment(&posts, Some(&scorer));
        match &sentiment {
            Some(artifact) => self.write_artifact(SENTIMENT_FILE, artifact, &mut summary)?,
            None => summary.skipped.push("sentiment".to_string()),
        }

        let topics = match compute_topics(&posts, &self.config.topics, self.config.seed) {
            Ok(artifact) => artifact,
            Err(error) => {
                warn!(%error, "topic stage failed, skipping");
                None
            }
        };
        match &topics {
            Some(artifact) => self.write_artifact(TOPICS_FILE, artifact, &mut summary)?,
            None => summary.skipped.push("topics".to_string()),
        }

        let network = compute_network(&posts, &self.config.network);
        self.write_artifact(NETWORK_FILE, &network, &mut summary)?;

        match compute_semantic_map(&posts, &self.config.semantic, self.config.seed) {
            Ok(Some(artifact)) => self.write_artifact(SEMANTIC_MAP_FILE, &artifact, &mut summary)?,
            Ok(None) => summary.skipped.push("semantic map".to_string()),
            Err(error) => {
                warn!(%error, "semantic map stage failed, skipping");
                summary.skipped.push("semantic map".to_string());
            }
        }

        let events = self.read_events();
        match correlate_events(&events, &overview, sentiment.as_ref(), topics.as_ref()) {
            Some(correlations) => {
                self.write_artifact(CORRELATIONS_FILE, &correlations, &mut summary)?
            }
            None => summary.skipped.push("event correlation".to_string()),
        }

        Ok(summary)
    }

    /// Read the primary input. Failure here is fatal: without records
    /// there is nothing to analyze.
    fn read_records(&self) -> Result<Vec<Value>> {
        let raw = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read input file {}", self.input.display()))?;
        let parsed: Value = serde_json::from_str(&raw)
            .with_context(|| format!("input file {} is not valid JSON", self.input.display()))?;
        match parsed {
            Value::Array(records) => Ok(records),
            _ => anyhow::bail!(
                "input file {} must contain a JSON array of records",
                self.input.display()
            ),
        }
    }

    /// Read the optional events file. Any problem downgrades to a
    /// warning and an empty event list.
    fn read_events(&self) -> Vec<Value> {
        let Some(path) = &self.events else {
            return Vec::new();
        };
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(path = %path.display(), %error, "events file unreadable, skipping correlation");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(events)) => events,
            Ok(_) => {
                warn!(path = %path.display(), "events file is not a JSON array, skipping correlation");
                Vec::new()
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "events file is not valid JSON, skipping correlation");
                Vec::new()
            }
        }
    }

    fn write_artifact<T: serde::Serialize>(
        &self,
        name: &str,
        artifact: &T,
        summary: &mut RunSummary,
    ) -> Result<()> {
        let path = self.output.join(name);
        let json = serde_json::to_string_pretty(artifact)
            .with_context(|| format!("failed to serialize {}", name))?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(artifact = name, "artifact written");
        summary.artifacts.push(name.to_string());
        Ok(())
    }
}

impl RunSummary {
    /// One-line human rendering for the end of a run.
    pub fn describe(&self) -> String {
        format!(
            "{} posts analyzed, {} artifacts written, {} stages skipped",
            self.posts,
            self.artifacts.len(),
            self.skipped.len()
        )
    }
}
