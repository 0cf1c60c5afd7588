//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Batch analytics over a snapshot of social-media post records.
///
/// Reads a JSON collection of post records, derives dashboard-ready
/// artifacts (overview, sentiment, topics, network, semantic map, event
/// correlations), and writes each artifact as an independent JSON file.
#[derive(Debug, Parser)]
#[command(name = "threadsift", version, about)]
pub struct Cli {
    /// Path to the input record collection (a JSON array).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Optional path to a JSON array of dated events to correlate.
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Directory the artifacts are written into.
    #[arg(short, long, default_value = "precomputed")]
    pub output: PathBuf,

    /// Optional TOML file overriding the default analysis settings.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the random seed from the config.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["threadsift", "--input", "data.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("data.json"));
        assert_eq!(cli.output, PathBuf::from("precomputed"));
        assert!(cli.events.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "threadsift",
            "--input",
            "data.json",
            "--events",
            "events.json",
            "--output",
            "out",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.events, Some(PathBuf::from("events.json")));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["threadsift"]).is_err());
    }
}
