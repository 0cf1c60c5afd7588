//! Error types for the analysis stages

use thiserror::Error;

/// Errors that can fail a single stage.
///
/// A failed stage is local: the orchestrator logs it and continues with
/// the remaining stages.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A numeric fit (topic model, projection, clustering) failed.
    #[error("numeric fit error: {0}")]
    Numeric(#[from] threadsift_numeric::NumericError),
}
