//! Threadsift Numeric Layer
//!
//! The statistical collaborators the analysis stages invoke: a dense
//! row-major matrix, principal-component projection, k-means clustering
//! and latent-topic decomposition. Each fit takes an explicit seed so a
//! pipeline run is repeatable bit-for-bit.
//!
//! The contract is deliberately narrow: matrices or term-count corpora
//! in, structured numeric output out. Stages never reach into fit
//! internals.

pub mod error;
pub mod kmeans;
pub mod lda;
pub mod matrix;
pub mod pca;

pub use error::{NumericError, Result};
pub use kmeans::KMeans;
pub use lda::LatentDirichlet;
pub use matrix::Matrix;
pub use pca::Pca;
