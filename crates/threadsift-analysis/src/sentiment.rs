//! Sentiment stage - per-post classification and daily distribution

use std::collections::BTreeMap;
use threadsift_domain::traits::SentimentScorer;
use threadsift_domain::{
    Post, SentimentArtifact, SentimentDistribution, SentimentLabel, SentimentRecord,
    SentimentTimelineEntry,
};
use tracing::{info, warn};

/// Classify every post and aggregate the daily label distribution.
///
/// The scorer is an optional capability: without one the stage produces
/// no artifact. A post with no analyzable text is recorded as neutral
/// with score 0 and skipped from the global distribution; date-keyed
/// buckets count every post that has a date.
pub fn compute_sentiment(
    posts: &[Post],
    scorer: Option<&dyn SentimentScorer>,
) -> Option<SentimentArtifact> {
    let Some(scorer) = scorer else {
        warn!("no sentiment scorer available, skipping sentiment stage");
        return None;
    };

    let mut distribution = SentimentDistribution::default();
    let mut by_date: BTreeMap<String, SentimentTimelineEntry> = BTreeMap::new();
    let mut post_sentiments = Vec::with_capacity(posts.len());

    for post in posts {
        let (label, score) = if post.has_text() {
            let compound = scorer.compound(&post.text);
            let label = SentimentLabel::from_compound(compound);
            distribution.record(label);
            (label, compound)
        } else {
            (SentimentLabel::Neutral, 0.0)
        };

        if post.has_date() {
            let entry = by_date
                .entry(post.date.clone())
                .or_insert_with(|| SentimentTimelineEntry {
                    date: post.date.clone(),
                    ..SentimentTimelineEntry::default()
                });
            match label {
                SentimentLabel::Positive => entry.positive += 1,
                SentimentLabel::Negative => entry.negative += 1,
                SentimentLabel::Neutral => entry.neutral += 1,
            }
            entry.total += 1;
        }

        post_sentiments.push(SentimentRecord {
            id: post.id.clone(),
            sentiment: label,
            score,
        });
    }

    info!(
        positive = distribution.positive,
        negative = distribution.negative,
        neutral = distribution.neutral,
        "computed sentiment distribution"
    );

    Some(SentimentArtifact {
        distribution,
        timeline: by_date.into_values().collect(),
        post_sentiments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconScorer;

    fn post(id: &str, date: &str, text: &str) -> Post {
        Post {
            id: id.to_string(),
            author: "alice".to_string(),
            subreddit: "news".to_string(),
            date: date.to_string(),
            text: text.to_string(),
        }
    }

    fn run(posts: &[Post]) -> SentimentArtifact {
        let scorer = LexiconScorer::new();
        compute_sentiment(posts, Some(&scorer)).unwrap()
    }

    #[test]
    fn missing_scorer_skips_the_stage() {
        assert!(compute_sentiment(&[post("a", "2024-01-01", "hi")], None).is_none());
    }

    #[test]
    fn classifies_and_counts_by_label() {
        let artifact = run(&[
            post("p1", "2024-01-01", "Great news today"),
            post("p2", "2024-01-01", "Terrible news"),
            post("p3", "2024-01-01", "The report was published"),
        ]);
        assert_eq!(artifact.distribution.positive, 1);
        assert_eq!(artifact.distribution.negative, 1);
        assert_eq!(artifact.distribution.neutral, 1);
        assert_eq!(artifact.post_sentiments.len(), 3);
        assert_eq!(artifact.post_sentiments[0].sentiment, SentimentLabel::Positive);
        assert_eq!(artifact.post_sentiments[1].sentiment, SentimentLabel::Negative);
    }

    #[test]
    fn empty_text_is_neutral_and_off_the_distribution() {
        let artifact = run(&[post("p1", "2024-01-01", "")]);
        assert_eq!(artifact.distribution, SentimentDistribution::default());
        assert_eq!(artifact.post_sentiments.len(), 1);
        assert_eq!(artifact.post_sentiments[0].sentiment, SentimentLabel::Neutral);
        assert_eq!(artifact.post_sentiments[0].score, 0.0);
        // dated posts bucket into the timeline even without text
        assert_eq!(artifact.timeline.len(), 1);
        assert_eq!(artifact.timeline[0].neutral, 1);
        assert_eq!(artifact.timeline[0].total, 1);
    }

    #[test]
    fn undated_posts_stay_off_the_timeline() {
        let artifact = run(&[post("p1", "", "Great news today")]);
        assert!(artifact.timeline.is_empty());
        assert_eq!(artifact.distribution.positive, 1);
    }

    #[test]
    fn timeline_entries_balance() {
        let artifact = run(&[
            post("p1", "2024-01-02", "Great win"),
            post("p2", "2024-01-02", "awful loss today"),
            post("p3", "2024-01-01", "plain words"),
            post("p4", "2024-01-02", ""),
        ]);
        assert_eq!(artifact.timeline.len(), 2);
        for entry in &artifact.timeline {
            assert_eq!(
                entry.positive + entry.negative + entry.neutral,
                entry.total
            );
        }
        // ascending by date
        assert_eq!(artifact.timeline[0].date, "2024-01-01");
        assert_eq!(artifact.timeline[1].date, "2024-01-02");
        assert_eq!(artifact.timeline[1].total, 3);
    }

    #[test]
    fn record_order_preserves_input_order() {
        let artifact = run(&[
            post("first", "2024-01-01", "good"),
            post("second", "2024-01-01", "bad"),
        ]);
        assert_eq!(artifact.post_sentiments[0].id, "first");
        assert_eq!(artifact.post_sentiments[1].id, "second");
    }
}
