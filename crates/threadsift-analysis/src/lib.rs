//! Threadsift Analysis Layer
//!
//! The six derivation stages of the pipeline: overview statistics,
//! sentiment classification, topic decomposition, the author
//! co-occurrence network, the 2-D semantic map, and event correlation.
//!
//! Every stage is a pure function from normalized [`Post`]s (plus
//! configuration) to an artifact value. Stages never touch the
//! filesystem and never mutate each other's output; a stage that cannot
//! produce a meaningful result (thin corpus, empty vocabulary, missing
//! collaborator) returns `None` rather than failing the run.
//!
//! [`Post`]: threadsift_domain::Post

pub mod config;
pub mod correlate;
pub mod error;
pub mod lexicon;
pub mod network;
pub mod overview;
pub mod semantic;
pub mod sentiment;
pub mod stopwords;
pub mod text;
pub mod topics;
pub mod vectorize;

pub use config::{AnalysisConfig, NetworkConfig, SemanticConfig, TopicConfig};
pub use correlate::correlate_events;
pub use error::AnalysisError;
pub use lexicon::LexiconScorer;
pub use network::compute_network;
pub use overview::compute_overview;
pub use semantic::compute_semantic_map;
pub use sentiment::compute_sentiment;
pub use topics::compute_topics;
