//! Overview stage - aggregate statistics and activity timeline

use std::collections::BTreeMap;
use threadsift_domain::overview::{AuthorCount, SubredditCount, TimelinePoint};
use threadsift_domain::{DateRange, OverviewArtifact, OverviewStats, Post};
use tracing::info;

/// Authors reported in the ranking.
const TOP_AUTHORS: usize = 20;

/// Subreddits reported in the ranking.
const TOP_SUBREDDITS: usize = 10;

/// Running counter keyed by first-encounter order, so ranking ties
/// resolve the same way on every run.
#[derive(Debug, Default)]
struct EncounterCounts {
    counts: BTreeMap<String, (usize, u64)>,
    next_rank: usize,
}

impl EncounterCounts {
    fn record(&mut self, key: &str) {
        let next_rank = self.next_rank;
        let entry = self
            .counts
            .entry(key.to_string())
            .or_insert_with(|| (next_rank, 0));
        if entry.1 == 0 {
            self.next_rank += 1;
        }
        entry.1 += 1;
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    /// Keys ranked by count descending, first-seen order on ties.
    fn ranked(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &(usize, u64))> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.1 .0.cmp(&b.1 .0)));
        entries
            .into_iter()
            .take(limit)
            .map(|(key, &(_, count))| (key.clone(), count))
            .collect()
    }
}

/// Compute the overview artifact: headline stats, the per-date volume
/// timeline, and the author and subreddit rankings.
pub fn compute_overview(posts: &[Post]) -> OverviewArtifact {
    let mut by_date: BTreeMap<String, u64> = BTreeMap::new();
    let mut authors = EncounterCounts::default();
    let mut subreddits = EncounterCounts::default();

    for post in posts {
        if post.has_date() {
            *by_date.entry(post.date.clone()).or_insert(0) += 1;
        }
        if post.has_author() {
            authors.record(&post.author);
        }
        if !post.subreddit.is_empty() {
            subreddits.record(&post.subreddit);
        }
    }

    let date_range = DateRange {
        start: by_date.keys().next().cloned().unwrap_or_default(),
        end: by_date.keys().next_back().cloned().unwrap_or_default(),
    };

    let stats = OverviewStats {
        total_posts: posts.len() as u64,
        unique_authors: authors.len() as u64,
        unique_subreddits: subreddits.len() as u64,
        date_range,
    };

    info!(
        total_posts = stats.total_posts,
        unique_authors = stats.unique_authors,
        unique_subreddits = stats.unique_subreddits,
        "computed overview statistics"
    );

    OverviewArtifact {
        stats,
        timeline: by_date
            .into_iter()
            .map(|(date, count)| TimelinePoint { date, count })
            .collect(),
        top_authors: authors
            .ranked(TOP_AUTHORS)
            .into_iter()
            .map(|(author, count)| AuthorCount { author, count })
            .collect(),
        top_subreddits: subreddits
            .ranked(TOP_SUBREDDITS)
            .into_iter()
            .map(|(subreddit, count)| SubredditCount { subreddit, count })
            .collect(),
    }
}
