//! Configuration loading for the pipeline binary

use anyhow::{Context, Result};
use std::path::Path;
use threadsift_analysis::AnalysisConfig;

/// Load the analysis configuration.
///
/// Without a config file the defaults apply. A seed given on the command
/// line wins over the file.
pub fn load(path: Option<&Path>, seed_override: Option<u64>) -> Result<AnalysisConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            AnalysisConfig::from_toml(&raw).map_err(anyhow::Error::msg)?
        }
        None => AnalysisConfig::default(),
    };

    if let Some(seed) = seed_override {
        config.seed = seed;
    }

    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = load(None, None).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.topics.n_topics, 5);
    }

    #[test]
    fn seed_override_wins() {
        let config = load(None, Some(7)).unwrap();
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn file_settings_are_honored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 5\n\n[network]\nmax_nodes = 100").unwrap();
        let config = load(Some(file.path()), None).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.network.max_nodes, 100);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[topics]\nn_topics = 0").unwrap();
        assert!(load(Some(file.path()), None).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Some(Path::new("/definitely/not/here.toml")), None).is_err());
    }
}
