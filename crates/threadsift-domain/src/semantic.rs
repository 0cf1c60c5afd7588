//! Semantic map artifact types - 2-D document layout with cluster labels

use serde::{Deserialize, Serialize};

/// One qualifying document placed on the 2-D map.
///
/// The coordinate and the cluster id are fit independently over the same
/// term-weight matrix; they are not required to agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticPoint {
    /// Source post id, may be empty.
    pub id: String,
    /// First projected coordinate.
    pub x: f64,
    /// Second projected coordinate.
    pub y: f64,
    /// Assigned cluster id in `[0, clusters)`.
    pub cluster: usize,
    /// Post author.
    pub author: String,
    /// Display snippet, at most 100 characters plus an ellipsis.
    pub text: String,
}

/// The semantic map stage artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMapArtifact {
    /// One point per qualifying document, input order preserved.
    pub points: Vec<SemanticPoint>,
    /// Number of clusters the assignment was fit with.
    pub clusters: usize,
}
