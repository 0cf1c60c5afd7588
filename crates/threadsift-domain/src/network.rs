//! Network artifact types - the author co-occurrence graph

use serde::{Deserialize, Serialize};

/// One author in the retained top-N node set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Author name, doubles as node identity.
    pub id: String,
    /// Display name, same as `id`.
    pub name: String,
    /// Visual size hint, the author's post count.
    pub val: u64,
    /// Post count.
    pub posts: u64,
}

/// One undirected co-occurrence edge.
///
/// `source` and `target` are canonicalized by sort order, so the pair
/// (A, B) and (B, A) are the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkLink {
    /// Lexicographically smaller endpoint.
    pub source: String,
    /// Lexicographically larger endpoint.
    pub target: String,
    /// Co-occurrence count, always >= the retention threshold.
    pub value: u64,
}

/// The network stage artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkArtifact {
    /// Retained nodes, ranked by post count descending.
    pub nodes: Vec<NetworkNode>,
    /// Retained edges between retained nodes.
    pub links: Vec<NetworkLink>,
}
