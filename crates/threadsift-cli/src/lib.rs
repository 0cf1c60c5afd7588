//! Threadsift CLI - the pipeline orchestrator
//!
//! The binary is the only component that touches the filesystem: it
//! reads the record collection and the optional event list, runs the
//! analysis stages strictly in dependency order, and writes one JSON
//! artifact per stage. A stage that produces nothing (thin data, missing
//! optional input) is skipped with a warning; the remaining stages still
//! run and persist.

pub mod cli;
pub mod config;
pub mod pipeline;

pub use cli::Cli;
pub use pipeline::{Pipeline, RunSummary};
