//! Threadsift Domain Layer
//!
//! This crate contains the canonical entities and artifact types for the
//! threadsift analysis pipeline. Everything downstream of normalization
//! speaks in these types.
//!
//! ## Key Concepts
//!
//! - **Post**: the canonical input record (author, channel, date bucket,
//!   combined text)
//! - **Artifact**: one independently persisted output document produced by
//!   one pipeline stage (overview, sentiment, topics, network, semantic
//!   map, event correlations)
//!
//! ## Architecture
//!
//! Artifact structs serialize directly into the documents the dashboard
//! consumes; field names here are the wire format. Trait definitions for
//! injectable collaborators (the sentiment scorer) live in [`traits`];
//! implementations live in other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod correlation;
pub mod network;
pub mod overview;
pub mod post;
pub mod semantic;
pub mod sentiment;
pub mod topics;
pub mod traits;

// Re-exports for convenience
pub use correlation::{CorrelationMetrics, EventCorrelation, TopicCount};
pub use network::{NetworkArtifact, NetworkLink, NetworkNode};
pub use overview::{DateRange, OverviewArtifact, OverviewStats};
pub use post::{Post, DELETED_AUTHOR};
pub use semantic::{SemanticMapArtifact, SemanticPoint};
pub use sentiment::{
    SentimentArtifact, SentimentDistribution, SentimentLabel, SentimentRecord,
    SentimentTimelineEntry,
};
pub use topics::{TermWeight, Topic, TopicEvolutionEntry, TopicsArtifact};
