//! Threadsift CLI - batch analytics over a social-media post snapshot.

use clap::Parser;
use threadsift_cli::{config, Cli, Pipeline};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let settings = config::load(cli.config.as_deref(), cli.seed)?;

    let pipeline = Pipeline::new(cli.input, cli.events, cli.output, settings);
    let summary = pipeline.run()?;
    println!("{}", summary.describe());
    Ok(())
}
