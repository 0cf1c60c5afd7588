//! Configuration for the analysis stages

use serde::{Deserialize, Serialize};

/// Configuration for the topic stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Number of latent topics to fit.
    pub n_topics: usize,
    /// Terms kept per topic, weight descending.
    pub n_top_words: usize,
    /// Posts qualify when their text is strictly longer than this.
    pub min_text_chars: usize,
    /// Document-frequency ceiling as a fraction of the corpus.
    pub max_df: f64,
    /// Document-frequency floor in absolute documents.
    pub min_df: usize,
    /// Vocabulary size cap.
    pub max_features: usize,
    /// Leading terms per topic used for evolution keyword matching.
    pub evolution_terms: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            n_topics: 5,
            n_top_words: 10,
            min_text_chars: 20,
            max_df: 0.95,
            min_df: 5,
            max_features: 5000,
            evolution_terms: 3,
        }
    }
}

/// Configuration for the network stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Authors retained as nodes, ranked by post count.
    pub max_nodes: usize,
    /// Minimum co-occurrence count for an edge to be kept.
    pub min_edge_weight: u64,
    /// Optional cap on distinct authors per (subreddit, date) bucket.
    ///
    /// Pair fan-out is quadratic in the bucket's author count; the cap is
    /// a safety valve for unusually hot buckets. Off by default to match
    /// the reference behavior.
    pub max_bucket_authors: Option<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            max_nodes: 500,
            min_edge_weight: 2,
            max_bucket_authors: None,
        }
    }
}

/// Configuration for the semantic map stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticConfig {
    /// Number of k-means clusters.
    pub n_clusters: usize,
    /// Minimum qualifying documents; below this the stage is a no-op.
    pub min_documents: usize,
    /// Posts qualify when their text is strictly longer than this.
    pub min_text_chars: usize,
    /// Document-frequency ceiling as a fraction of the corpus.
    pub max_df: f64,
    /// Document-frequency floor in absolute documents.
    pub min_df: usize,
    /// Vocabulary size cap.
    pub max_features: usize,
    /// k-means initialization attempts, best inertia wins.
    pub n_init: usize,
    /// Display snippet length in characters.
    pub snippet_chars: usize,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            n_clusters: 5,
            min_documents: 10,
            min_text_chars: 20,
            max_df: 0.95,
            min_df: 2,
            max_features: 1000,
            n_init: 10,
            snippet_chars: 100,
        }
    }
}

/// Configuration for the whole analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Seed for every stochastic fit. Fixed seed, repeatable artifacts.
    pub seed: u64,
    /// Topic stage settings.
    pub topics: TopicConfig,
    /// Network stage settings.
    pub network: NetworkConfig,
    /// Semantic map stage settings.
    pub semantic: SemanticConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            topics: TopicConfig::default(),
            network: NetworkConfig::default(),
            semantic: SemanticConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.topics.n_topics == 0 {
            return Err("topics.n_topics must be greater than 0".to_string());
        }
        if self.topics.n_top_words == 0 {
            return Err("topics.n_top_words must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.topics.max_df) {
            return Err("topics.max_df must be within [0, 1]".to_string());
        }
        if self.network.max_nodes == 0 {
            return Err("network.max_nodes must be greater than 0".to_string());
        }
        if self.semantic.n_clusters == 0 {
            return Err("semantic.n_clusters must be greater than 0".to_string());
        }
        if self.semantic.min_documents < self.semantic.n_clusters {
            return Err(
                "semantic.min_documents must be at least semantic.n_clusters".to_string(),
            );
        }
        if !(0.0..=1.0).contains(&self.semantic.max_df) {
            return Err("semantic.max_df must be within [0, 1]".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn default_seed_is_forty_two() {
        assert_eq!(AnalysisConfig::default().seed, 42);
    }

    #[test]
    fn zero_topics_is_invalid() {
        let mut config = AnalysisConfig::default();
        config.topics.n_topics = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn min_documents_below_clusters_is_invalid() {
        let mut config = AnalysisConfig::default();
        config.semantic.min_documents = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = AnalysisConfig::from_toml(
            r#"
            seed = 7

            [topics]
            n_topics = 3

            [network]
            max_bucket_authors = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.topics.n_topics, 3);
        assert_eq!(config.topics.n_top_words, 10);
        assert_eq!(config.network.max_bucket_authors, Some(200));
    }
}
