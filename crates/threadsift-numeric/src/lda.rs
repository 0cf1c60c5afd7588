//! Latent topic decomposition
//!
//! Fits a fixed number of latent topics over a term-count corpus with
//! collapsed Gibbs sampling: a bounded number of seeded sweeps over every
//! token, resampling its topic from the current doc-topic and topic-term
//! counts. The fit exposes a topics-by-terms weight matrix; higher weight
//! means the term is more characteristic of the topic.

use crate::error::{NumericError, Result};
use crate::matrix::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A document as sparse term counts: `(vocabulary index, count)` pairs.
pub type TermCounts = Vec<(usize, usize)>;

/// Latent Dirichlet topic model fit by collapsed Gibbs sampling.
#[derive(Debug, Clone)]
pub struct LatentDirichlet {
    /// Number of latent topics.
    n_topics: usize,
    /// Gibbs sweeps over the whole corpus.
    sweeps: usize,
    /// Document-topic smoothing prior.
    alpha: f64,
    /// Topic-term smoothing prior.
    beta: f64,
    /// Random seed.
    random_state: u64,
    /// Topics-by-terms weights after fitting.
    topic_term: Option<Matrix>,
}

impl LatentDirichlet {
    /// Create a model with `n_topics` topics and default priors.
    pub fn new(n_topics: usize) -> Self {
        Self {
            n_topics,
            sweeps: 20,
            alpha: 0.1,
            beta: 0.01,
            random_state: 0,
            topic_term: None,
        }
    }

    /// Set the number of Gibbs sweeps.
    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    /// Set the random seed.
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// The fitted topics-by-terms weight matrix.
    pub fn topic_term_weights(&self) -> Option<&Matrix> {
        self.topic_term.as_ref()
    }

    /// Fit the model over `documents` drawn from a vocabulary of
    /// `n_terms` entries.
    ///
    /// # Errors
    ///
    /// Fails when the corpus or vocabulary is empty, no document carries
    /// a token, or `n_topics` is zero.
    pub fn fit(&mut self, documents: &[TermCounts], n_terms: usize) -> Result<()> {
        if self.n_topics == 0 {
            return Err(NumericError::InvalidHyperparameter {
                param: "n_topics".to_string(),
                constraint: "must be at least 1".to_string(),
            });
        }
        if documents.is_empty() || n_terms == 0 {
            return Err(NumericError::InsufficientInput(
                "topic model needs a non-empty corpus and vocabulary".to_string(),
            ));
        }

        // Expand counts into individual token slots, each carrying its
        // document, term, and current topic assignment.
        let mut token_doc = Vec::new();
        let mut token_term = Vec::new();
        for (doc, counts) in documents.iter().enumerate() {
            for &(term, count) in counts {
                if term >= n_terms {
                    return Err(NumericError::DimensionMismatch {
                        expected: format!("term index < {}", n_terms),
                        actual: format!("term index {}", term),
                    });
                }
                for _ in 0..count {
                    token_doc.push(doc);
                    token_term.push(term);
                }
            }
        }
        if token_doc.is_empty() {
            return Err(NumericError::InsufficientInput(
                "topic model corpus has no tokens".to_string(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.random_state);
        let n_tokens = token_doc.len();
        let n_docs = documents.len();

        let mut assignments = vec![0usize; n_tokens];
        let mut doc_topic = vec![0u32; n_docs * self.n_topics];
        let mut topic_term = vec![0u32; self.n_topics * n_terms];
        let mut topic_total = vec![0u32; self.n_topics];

        for i in 0..n_tokens {
            let topic = rng.gen_range(0..self.n_topics);
            assignments[i] = topic;
            doc_topic[token_doc[i] * self.n_topics + topic] += 1;
            topic_term[topic * n_terms + token_term[i]] += 1;
            topic_total[topic] += 1;
        }

        let beta_sum = self.beta * n_terms as f64;
        let mut weights = vec![0.0; self.n_topics];

        for _ in 0..self.sweeps {
            for i in 0..n_tokens {
                let doc = token_doc[i];
                let term = token_term[i];
                let old = assignments[i];

                doc_topic[doc * self.n_topics + old] -= 1;
                topic_term[old * n_terms + term] -= 1;
                topic_total[old] -= 1;

                let mut total = 0.0;
                for (topic, weight) in weights.iter_mut().enumerate() {
                    let term_part = (f64::from(topic_term[topic * n_terms + term])
                        + self.beta)
                        / (f64::from(topic_total[topic]) + beta_sum);
                    let doc_part =
                        f64::from(doc_topic[doc * self.n_topics + topic]) + self.alpha;
                    *weight = term_part * doc_part;
                    total += *weight;
                }

                let mut target = rng.gen::<f64>() * total;
                let mut sampled = self.n_topics - 1;
                for (topic, &weight) in weights.iter().enumerate() {
                    if target <= weight {
                        sampled = topic;
                        break;
                    }
                    target -= weight;
                }

                assignments[i] = sampled;
                doc_topic[doc * self.n_topics + sampled] += 1;
                topic_term[sampled * n_terms + term] += 1;
                topic_total[sampled] += 1;
            }
        }

        // Smoothed topic-term counts become the exported weights.
        let weights: Vec<f64> = topic_term
            .iter()
            .map(|&count| f64::from(count) + self.beta)
            .collect();
        self.topic_term = Some(Matrix::from_vec(self.n_topics, n_terms, weights)?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two disjoint vocabularies: terms 0-2 in the first half of the
    /// corpus, terms 3-5 in the second half.
    fn split_corpus() -> Vec<TermCounts> {
        let mut documents = Vec::new();
        for _ in 0..10 {
            documents.push(vec![(0, 3), (1, 2), (2, 1)]);
        }
        for _ in 0..10 {
            documents.push(vec![(3, 3), (4, 2), (5, 1)]);
        }
        documents
    }

    #[test]
    fn fit_yields_topics_by_terms_weights() {
        let mut lda = LatentDirichlet::new(2).with_random_state(42);
        lda.fit(&split_corpus(), 6).unwrap();
        let weights = lda.topic_term_weights().unwrap();
        assert_eq!(weights.shape(), (2, 6));
        assert!(weights.as_slice().iter().all(|&w| w > 0.0));
    }

    #[test]
    fn weights_conserve_token_mass() {
        let corpus = split_corpus();
        let tokens: usize = corpus
            .iter()
            .flat_map(|d| d.iter().map(|&(_, c)| c))
            .sum();
        let mut lda = LatentDirichlet::new(2).with_random_state(42);
        lda.fit(&corpus, 6).unwrap();
        let total: f64 = lda.topic_term_weights().unwrap().as_slice().iter().sum();
        let smoothing = 2.0 * 6.0 * 0.01;
        assert!((total - tokens as f64 - smoothing).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_weights() {
        let corpus = split_corpus();
        let mut a = LatentDirichlet::new(3).with_random_state(42);
        let mut b = LatentDirichlet::new(3).with_random_state(42);
        a.fit(&corpus, 6).unwrap();
        b.fit(&corpus, 6).unwrap();
        assert_eq!(a.topic_term_weights(), b.topic_term_weights());
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let mut lda = LatentDirichlet::new(2);
        assert!(lda.fit(&[], 6).is_err());
        assert!(lda.fit(&[vec![]], 6).is_err());
    }

    #[test]
    fn out_of_vocabulary_term_is_rejected() {
        let mut lda = LatentDirichlet::new(2);
        assert!(lda.fit(&[vec![(9, 1)]], 6).is_err());
    }
}
