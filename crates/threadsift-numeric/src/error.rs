//! Error types for numeric fits

use thiserror::Error;

/// Result alias for numeric operations.
pub type Result<T> = std::result::Result<T, NumericError>;

/// Errors that can occur while building or fitting numeric models.
#[derive(Error, Debug)]
pub enum NumericError {
    /// Matrix dimensions don't match the operation.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description.
        expected: String,
        /// Actual dimensions found.
        actual: String,
    },

    /// The input has no rows, no columns, or too few samples to fit.
    #[error("insufficient input: {0}")]
    InsufficientInput(String),

    /// A hyperparameter value is outside its valid range.
    #[error("invalid hyperparameter {param}: {constraint}")]
    InvalidHyperparameter {
        /// Parameter name.
        param: String,
        /// Constraint description.
        constraint: String,
    },

    /// Transform or accessor called before a successful fit.
    #[error("model not fitted")]
    NotFitted,
}
