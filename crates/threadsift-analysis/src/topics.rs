//! Topic stage - latent topic decomposition and keyword-match evolution

use crate::config::TopicConfig;
use crate::error::AnalysisError;
use crate::vectorize::CountVectorizer;
use std::collections::BTreeMap;
use threadsift_domain::{Post, TermWeight, Topic, TopicEvolutionEntry, TopicsArtifact};
use tracing::{debug, info, warn};

/// Fit the topic model and derive the per-date evolution counters.
///
/// Posts qualify for the corpus when their text is strictly longer than
/// the configured minimum. A corpus that is too small or too uniform to
/// yield a vocabulary produces `Ok(None)`: a recoverable no-op, not a
/// failure.
pub fn compute_topics(
    posts: &[Post],
    config: &TopicConfig,
    seed: u64,
) -> Result<Option<TopicsArtifact>, AnalysisError> {
    let corpus: Vec<&str> = posts
        .iter()
        .filter(|post| post.text.chars().count() > config.min_text_chars)
        .map(|post| post.text.as_str())
        .collect();

    if corpus.is_empty() {
        warn!("no posts qualify for topic modeling, skipping topic stage");
        return Ok(None);
    }
    debug!(documents = corpus.len(), "topic corpus assembled");

    let vectorizer = CountVectorizer::new(config.max_df, config.min_df, config.max_features);
    let Some(term_matrix) = vectorizer.fit_transform(&corpus) else {
        warn!("vectorization left no usable vocabulary, skipping topic stage");
        return Ok(None);
    };

    let mut model = threadsift_numeric::LatentDirichlet::new(config.n_topics)
        .with_random_state(seed);
    model.fit(&term_matrix.documents, term_matrix.vocabulary.len())?;
    let weights = model
        .topic_term_weights()
        .ok_or(threadsift_numeric::NumericError::NotFitted)?;

    let mut topics = Vec::with_capacity(config.n_topics);
    for topic_index in 0..config.n_topics {
        let mut terms: Vec<TermWeight> = term_matrix
            .vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| TermWeight {
                term: term.clone(),
                weight: weights.get(topic_index, i),
            })
            .collect();
        terms.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.term.cmp(&b.term))
        });
        terms.truncate(config.n_top_words);

        let id = topic_index + 1;
        info!(
            topic = id,
            terms = %terms
                .iter()
                .take(5)
                .map(|w| w.term.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            "fitted topic"
        );
        topics.push(Topic {
            id,
            name: format!("Topic {}", id),
            words: terms,
        });
    }

    let evolution = compute_evolution(posts, &topics, config.evolution_terms);

    Ok(Some(TopicsArtifact { topics, evolution }))
}

/// Count, per date, the posts whose text contains any of each topic's
/// leading terms. The match is a case-insensitive substring test and is
/// deliberately overlapping: one post may increment several topics on
/// the same day, or none at all.
fn compute_evolution(
    posts: &[Post],
    topics: &[Topic],
    evolution_terms: usize,
) -> Vec<TopicEvolutionEntry> {
    let leading_terms: Vec<(&str, Vec<&str>)> = topics
        .iter()
        .map(|topic| {
            let terms = topic
                .words
                .iter()
                .take(evolution_terms)
                .map(|w| w.term.as_str())
                .collect();
            (topic.name.as_str(), terms)
        })
        .collect();

    let mut by_date: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
    for post in posts {
        if !post.has_text() || !post.has_date() {
            continue;
        }
        let text_lower = post.text.to_lowercase();
        for (name, terms) in &leading_terms {
            if terms.iter().any(|term| text_lower.contains(term)) {
                let counts = by_date.entry(post.date.clone()).or_insert_with(|| {
                    topics
                        .iter()
                        .map(|topic| (topic.name.clone(), 0))
                        .collect()
                });
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    by_date
        .into_iter()
        .map(|(date, counts)| TopicEvolutionEntry { date, counts })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str, text: &str) -> Post {
        Post {
            id: String::new(),
            author: "alice".to_string(),
            subreddit: "rust".to_string(),
            date: date.to_string(),
            text: text.to_string(),
        }
    }

    fn config() -> TopicConfig {
        TopicConfig {
            n_topics: 2,
            n_top_words: 5,
            min_text_chars: 20,
            max_df: 1.0,
            min_df: 1,
            max_features: 100,
            evolution_terms: 3,
        }
    }

    /// Corpus with two clearly separated vocabularies.
    fn split_corpus() -> Vec<Post> {
        let mut posts = Vec::new();
        for i in 0..8 {
            posts.push(post(
                &format!("2024-01-{:02}", i + 1),
                "football match score goal stadium crowd tonight",
            ));
            posts.push(post(
                &format!("2024-01-{:02}", i + 1),
                "compiler borrow checker lifetime trait generics",
            ));
        }
        posts
    }

    #[test]
    fn fits_configured_topic_count_and_term_lists() {
        let artifact = compute_topics(&split_corpus(), &config(), 42)
            .unwrap()
            .unwrap();
        assert_eq!(artifact.topics.len(), 2);
        for topic in &artifact.topics {
            assert_eq!(topic.words.len(), 5);
            assert_eq!(topic.name, format!("Topic {}", topic.id));
            // weights non-increasing
            for pair in topic.words.windows(2) {
                assert!(pair[0].weight >= pair[1].weight);
            }
        }
        assert_eq!(artifact.topics[0].id, 1);
        assert_eq!(artifact.topics[1].id, 2);
    }

    #[test]
    fn term_list_shrinks_with_small_vocabulary() {
        let mut cfg = config();
        cfg.n_top_words = 50;
        let artifact = compute_topics(&split_corpus(), &cfg, 42).unwrap().unwrap();
        for topic in &artifact.topics {
            assert!(topic.words.len() <= 50);
            assert!(!topic.words.is_empty());
        }
    }

    #[test]
    fn short_texts_leave_no_corpus() {
        let posts = vec![post("2024-01-01", "too short"), post("2024-01-02", "also")];
        assert!(compute_topics(&posts, &config(), 42).unwrap().is_none());
    }

    #[test]
    fn stop_word_corpus_is_a_no_op() {
        let posts = vec![
            post("2024-01-01", "the and of was were been being have has"),
            post("2024-01-02", "the and of was were been being have has"),
        ];
        assert!(compute_topics(&posts, &config(), 42).unwrap().is_none());
    }

    #[test]
    fn evolution_counts_overlapping_matches() {
        let artifact = compute_topics(&split_corpus(), &config(), 42)
            .unwrap()
            .unwrap();
        // Every post matches at least one topic, so every date appears.
        assert_eq!(artifact.evolution.len(), 8);
        for entry in &artifact.evolution {
            assert_eq!(entry.counts.len(), 2);
            let total: u64 = entry.counts.values().sum();
            assert!(total >= 1);
        }
        // ascending dates
        for pair in artifact.evolution.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn undated_posts_stay_out_of_evolution() {
        let mut posts = split_corpus();
        posts.push(post("", "football match score goal stadium crowd tonight"));
        let artifact = compute_topics(&posts, &config(), 42).unwrap().unwrap();
        assert_eq!(artifact.evolution.len(), 8);
    }

    #[test]
    fn same_seed_reproduces_the_fit() {
        let a = compute_topics(&split_corpus(), &config(), 42).unwrap().unwrap();
        let b = compute_topics(&split_corpus(), &config(), 42).unwrap().unwrap();
        assert_eq!(a, b);
    }
}
