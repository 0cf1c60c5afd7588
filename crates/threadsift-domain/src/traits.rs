//! Trait definitions for injectable collaborators
//!
//! These traits define the boundaries between the stages and the
//! statistical routines they invoke. Implementations live in other crates.

/// Trait for compound-polarity sentiment scoring
///
/// Implemented by the analysis layer (threadsift-analysis's lexicon
/// scorer). The sentiment stage treats the scorer as an optional
/// capability: when none is injected the stage produces no artifact.
pub trait SentimentScorer {
    /// Score a non-empty text, returning a compound polarity in [-1, 1].
    ///
    /// Positive values lean positive, negative values lean negative, and
    /// magnitudes near zero are neutral. Must be deterministic for a
    /// given input.
    fn compound(&self, text: &str) -> f64;
}
