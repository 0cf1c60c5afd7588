//! Event correlation artifact types

use serde::{Deserialize, Serialize};

/// A topic and its match count on the correlated date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    /// Topic display name.
    pub name: String,
    /// Match count on the event date.
    pub count: u64,
}

/// Metrics joined against one event's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMetrics {
    /// Post volume on the event date, 0 when the date is absent.
    pub volume: u64,
    /// negative / (positive + negative + neutral), rounded to 2 decimals,
    /// 0 when the denominator is 0.
    pub negative_sentiment_ratio: f64,
    /// Top 3 topics by count on the event date, empty when the date has
    /// no evolution entry.
    pub top_topics: Vec<TopicCount>,
}

/// One correlation record per input event, input order preserved.
///
/// The event payload is opaque to the pipeline; only its `date` field is
/// read and the whole value is echoed back for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCorrelation {
    /// The event as supplied, untouched.
    pub event: serde_json::Value,
    /// Metrics for the event's date.
    pub metrics: CorrelationMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn correlation_echoes_event_payload() {
        let correlation = EventCorrelation {
            event: json!({"date": "2024-01-01", "label": "launch", "kind": "release"}),
            metrics: CorrelationMetrics {
                volume: 12,
                negative_sentiment_ratio: 0.25,
                top_topics: vec![TopicCount { name: "Topic 1".to_string(), count: 4 }],
            },
        };
        let json = serde_json::to_value(&correlation).unwrap();
        assert_eq!(json["event"]["label"], "launch");
        assert_eq!(json["metrics"]["volume"], 12);
        assert_eq!(json["metrics"]["negative_sentiment_ratio"], 0.25);
    }
}
