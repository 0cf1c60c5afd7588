//! Document-term vectorizers
//!
//! Builds term-frequency and TF-IDF representations over a text corpus
//! with a document-frequency ceiling and floor, a vocabulary size cap,
//! and stop-word exclusion. A corpus that leaves no usable vocabulary is
//! a recoverable condition: the vectorizers return `None` and the calling
//! stage becomes a no-op.

use crate::text::tokenize;
use std::collections::{BTreeMap, HashMap};
use threadsift_numeric::lda::TermCounts;
use threadsift_numeric::Matrix;
use tracing::debug;

/// A fitted sparse document-term representation.
#[derive(Debug, Clone)]
pub struct TermMatrix {
    /// Vocabulary terms, alphabetical.
    pub vocabulary: Vec<String>,
    /// Per-document `(vocabulary index, count)` pairs.
    pub documents: Vec<TermCounts>,
}

/// Term-count vectorizer with df bounds and a vocabulary cap.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    /// Terms in more than this fraction of documents are too common.
    max_df: f64,
    /// Terms in fewer than this many documents are too rare.
    min_df: usize,
    /// At most this many terms survive, ranked by corpus frequency.
    max_features: usize,
}

impl CountVectorizer {
    /// Create a vectorizer with the given bounds.
    pub fn new(max_df: f64, min_df: usize, max_features: usize) -> Self {
        Self {
            max_df,
            min_df,
            max_features,
        }
    }

    /// Fit the vocabulary and count every document.
    ///
    /// Returns `None` when the filtered vocabulary is empty.
    pub fn fit_transform(&self, texts: &[&str]) -> Option<TermMatrix> {
        if texts.is_empty() {
            return None;
        }

        let tokenized: Vec<Vec<String>> =
            texts.iter().map(|t| tokenize(t, true)).collect();

        // Document frequency and total corpus frequency per term
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        let mut corpus_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
            for token in tokens {
                *seen.entry(token.as_str()).or_insert(0) += 1;
            }
            for (term, count) in seen {
                *document_frequency.entry(term).or_insert(0) += 1;
                *corpus_frequency.entry(term).or_insert(0) += count;
            }
        }

        let df_ceiling = (self.max_df * texts.len() as f64).floor() as usize;
        let mut kept: Vec<(&str, usize)> = document_frequency
            .iter()
            .filter(|(_, &df)| df >= self.min_df && df <= df_ceiling)
            .map(|(&term, _)| (term, corpus_frequency[term]))
            .collect();

        // Vocabulary cap: keep the most frequent terms, alphabetical on ties
        if kept.len() > self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(self.max_features);
        }

        if kept.is_empty() {
            debug!("vectorizer produced an empty vocabulary");
            return None;
        }

        let mut vocabulary: Vec<String> =
            kept.iter().map(|(term, _)| term.to_string()).collect();
        vocabulary.sort_unstable();

        let index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, term)| (term.as_str(), i))
            .collect();

        let documents: Vec<TermCounts> = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
                for token in tokens {
                    if let Some(&i) = index.get(token.as_str()) {
                        *counts.entry(i).or_insert(0) += 1;
                    }
                }
                counts.into_iter().collect()
            })
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "fitted count vectorizer"
        );

        Some(TermMatrix {
            vocabulary,
            documents,
        })
    }
}

/// TF-IDF vectorizer: term counts weighted by smoothed inverse document
/// frequency, rows L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    counts: CountVectorizer,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the given bounds.
    pub fn new(max_df: f64, min_df: usize, max_features: usize) -> Self {
        Self {
            counts: CountVectorizer::new(max_df, min_df, max_features),
        }
    }

    /// Fit and weight the corpus into a dense matrix.
    ///
    /// Returns `None` when the filtered vocabulary is empty.
    pub fn fit_transform(&self, texts: &[&str]) -> Option<(Vec<String>, Matrix)> {
        let term_matrix = self.counts.fit_transform(texts)?;
        let n_docs = term_matrix.documents.len();
        let n_terms = term_matrix.vocabulary.len();

        let mut document_frequency = vec![0usize; n_terms];
        for doc in &term_matrix.documents {
            for &(term, _) in doc {
                document_frequency[term] += 1;
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut weighted = Matrix::zeros(n_docs, n_terms);
        for (row, doc) in term_matrix.documents.iter().enumerate() {
            let mut norm = 0.0;
            for &(term, count) in doc {
                let value = count as f64 * idf[term];
                weighted.set(row, term, value);
                norm += value * value;
            }
            if norm > 0.0 {
                let norm = norm.sqrt();
                for &(term, _) in doc {
                    weighted.set(row, term, weighted.get(row, term) / norm);
                }
            }
        }

        Some((term_matrix.vocabulary, weighted))
    }
}
