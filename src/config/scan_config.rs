// src/config/scan_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for the bulk-scan binary.
///
/// The library predicate takes no configuration; only the scanner and its
/// logging are tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of threads for the parallel scan. None lets rayon decide.
    pub threads: Option<usize>,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Candidates handed to a worker at a time.
    pub chunk_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            threads: None,
            log_level: "info".to_string(),
            chunk_size: 64,
        }
    }
}

impl ScanConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("log_level", "info")?
            .set_default("chunk_size", 64)?;

        if Path::new("scan.toml").exists() {
            builder = builder.add_source(File::with_name("scan.toml"));
        }

        // Override with environment variables (prefix: BPSW_)
        builder = builder.add_source(Environment::with_prefix("BPSW").try_parsing(true));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.threads, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.chunk_size, 64);
    }

    #[test]
    fn test_load_without_file() {
        // Should successfully load defaults when no config file exists
        let config = ScanConfig::load().unwrap_or_else(|_| ScanConfig::default());
        assert_eq!(config.chunk_size, 64);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("BPSW_LOG_LEVEL", "debug");
        let config = ScanConfig::load().unwrap_or_else(|_| ScanConfig::default());
        assert_eq!(config.log_level, "debug");
        std::env::remove_var("BPSW_LOG_LEVEL");
    }
}
