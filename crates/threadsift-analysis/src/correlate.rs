//! Event correlation stage - joins external events against the aggregates

use serde_json::Value;
use std::collections::BTreeMap;
use threadsift_domain::{
    CorrelationMetrics, EventCorrelation, OverviewArtifact, SentimentArtifact, TopicCount,
    TopicsArtifact,
};
use tracing::{info, warn};

/// Topics reported per correlated event.
const TOP_TOPICS: usize = 3;

/// Join each event's date against the overview, sentiment, and topic
/// aggregates.
///
/// An empty event list produces no artifact. A date missing from an
/// aggregate falls back to its documented default: zero volume, all-zero
/// sentiment counts, an empty topic list. One record per input event, in
/// input order.
pub fn correlate_events(
    events: &[Value],
    overview: &OverviewArtifact,
    sentiment: Option<&SentimentArtifact>,
    topics: Option<&TopicsArtifact>,
) -> Option<Vec<EventCorrelation>> {
    if events.is_empty() {
        warn!("no events supplied, skipping event correlation");
        return None;
    }

    let volume_by_date: BTreeMap<&str, u64> = overview
        .timeline
        .iter()
        .map(|point| (point.date.as_str(), point.count))
        .collect();

    let sentiment_by_date: BTreeMap<&str, (u64, u64, u64)> = sentiment
        .map(|artifact| {
            artifact
                .timeline
                .iter()
                .map(|e| (e.date.as_str(), (e.positive, e.negative, e.neutral)))
                .collect()
        })
        .unwrap_or_default();

    let topics_by_date: BTreeMap<&str, &BTreeMap<String, u64>> = topics
        .map(|artifact| {
            artifact
                .evolution
                .iter()
                .map(|entry| (entry.date.as_str(), &entry.counts))
                .collect()
        })
        .unwrap_or_default();

    // Rank ties resolve in artifact topic order
    let topic_order: Vec<&str> = topics
        .map(|artifact| artifact.topics.iter().map(|t| t.name.as_str()).collect())
        .unwrap_or_default();

    let correlations: Vec<EventCorrelation> = events
        .iter()
        .map(|event| {
            let date = event
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or_default();

            let volume = volume_by_date.get(date).copied().unwrap_or(0);
            let (positive, negative, neutral) =
                sentiment_by_date.get(date).copied().unwrap_or((0, 0, 0));
            let total = positive + negative + neutral;
            let negative_sentiment_ratio = if total == 0 {
                0.0
            } else {
                (negative as f64 / total as f64 * 100.0).round() / 100.0
            };

            let top_topics = topics_by_date
                .get(date)
                .map(|counts| {
                    let mut ranked: Vec<TopicCount> = topic_order
                        .iter()
                        .filter_map(|name| {
                            counts.get(*name).map(|&count| TopicCount {
                                name: name.to_string(),
                                count,
                            })
                        })
                        .collect();
                    ranked.sort_by(|a, b| b.count.cmp(&a.count));
                    ranked.truncate(TOP_TOPICS);
                    ranked
                })
                .unwrap_or_default();

            EventCorrelation {
                event: event.clone(),
                metrics: CorrelationMetrics {
                    volume,
                    negative_sentiment_ratio,
                    top_topics,
                },
            }
        })
        .collect();

    info!(events = correlations.len(), "correlated events");
    Some(correlations)
}
