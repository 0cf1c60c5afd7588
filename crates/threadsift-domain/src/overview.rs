//! Overview artifact types - aggregate statistics and activity timeline

use serde::{Deserialize, Serialize};

/// First and last date buckets seen in the data, empty when nothing is dated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest date bucket.
    pub start: String,
    /// Latest date bucket.
    pub end: String,
}

/// Headline counts for the whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Every normalized record, dated or not.
    pub total_posts: u64,
    /// Distinct attributable authors.
    pub unique_authors: u64,
    /// Distinct non-empty source channels.
    pub unique_subreddits: u64,
    /// Span of the dated activity.
    pub date_range: DateRange,
}

/// Post volume for one date bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Date bucket (`YYYY-MM-DD`).
    pub date: String,
    /// Posts on this date.
    pub count: u64,
}

/// One entry of the top-author ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// Author name.
    pub author: String,
    /// Posts attributed to the author.
    pub count: u64,
}

/// One entry of the top-subreddit ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubredditCount {
    /// Channel name.
    pub subreddit: String,
    /// Posts in the channel.
    pub count: u64,
}

/// The overview stage artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewArtifact {
    /// Headline counts.
    pub stats: OverviewStats,
    /// Per-date volume, ascending by date.
    pub timeline: Vec<TimelinePoint>,
    /// Most active authors, at most 20.
    pub top_authors: Vec<AuthorCount>,
    /// Most active channels, at most 10.
    pub top_subreddits: Vec<SubredditCount>,
}
