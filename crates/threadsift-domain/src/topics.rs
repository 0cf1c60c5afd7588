//! Topic artifact types - fitted topics and their evolution over time

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A vocabulary term and its weight within one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    /// Vocabulary term.
    pub term: String,
    /// Model weight for the term in this topic.
    pub weight: f64,
}

/// One fitted latent topic.
///
/// Invariant: `words` is sorted by weight descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// 1-based topic id.
    pub id: usize,
    /// Display name (`"Topic {id}"`).
    pub name: String,
    /// Top terms, weight descending, at most the configured top-word count.
    pub words: Vec<TermWeight>,
}

/// Per-topic match counts for one date bucket.
///
/// Counts come from keyword-overlap matching and are deliberately
/// non-exclusive: one post may increment several topics on the same day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEvolutionEntry {
    /// Date bucket (`YYYY-MM-DD`).
    pub date: String,
    /// Topic name to match count, every topic present.
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

/// The topic stage artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicsArtifact {
    /// The fitted topics.
    pub topics: Vec<Topic>,
    /// Per-date match counts, ascending by date.
    pub evolution: Vec<TopicEvolutionEntry>,
}
