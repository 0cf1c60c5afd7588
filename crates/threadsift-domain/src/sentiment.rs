//! Sentiment artifact types - per-post labels, global distribution, timeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way sentiment classification derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Compound score >= +0.05.
    Positive,
    /// Compound score <= -0.05.
    Negative,
    /// Everything in between, and posts with no analyzable text.
    Neutral,
}

impl SentimentLabel {
    /// Classify a compound polarity score using the symmetric 0.05 thresholds.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            SentimentLabel::Positive
        } else if compound <= -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

/// Per-post sentiment classification, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    /// Source post id, may be empty.
    pub id: String,
    /// Three-way label.
    pub sentiment: SentimentLabel,
    /// Compound polarity in [-1, 1]; 0 for posts with no text.
    pub score: f64,
}

/// Global label counts across the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// Posts classified positive.
    pub positive: u64,
    /// Posts classified negative.
    pub negative: u64,
    /// Posts classified neutral.
    pub neutral: u64,
}

impl SentimentDistribution {
    /// Increment the counter for one label.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }
}

/// Label counts for one date bucket.
///
/// Invariant: `positive + negative + neutral == total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTimelineEntry {
    /// Date bucket (`YYYY-MM-DD`).
    pub date: String,
    /// Positive posts on this date.
    pub positive: u64,
    /// Negative posts on this date.
    pub negative: u64,
    /// Neutral posts on this date.
    pub neutral: u64,
    /// All counted posts on this date.
    pub total: u64,
}

/// The sentiment stage artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentArtifact {
    /// Global label distribution over scored posts.
    pub distribution: SentimentDistribution,
    /// Per-date counts, ascending by date.
    pub timeline: Vec<SentimentTimelineEntry>,
    /// One record per input post, input order preserved.
    pub post_sentiments: Vec<SentimentRecord>,
}
