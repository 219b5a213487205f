//! Configuration loading and validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default dataset URL used when no --url/--file flag is given
    #[serde(default)]
    pub dataset_url: String,

    /// User agent for dataset fetches
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum rows shown in the stats table
    #[serde(default = "default_stats_limit")]
    pub stats_limit: usize,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_user_agent() -> String {
    format!("replay-meta/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout() -> u64 {
    30
}

fn default_stats_limit() -> usize {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_url: String::new(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            stats_limit: default_stats_limit(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }

        if self.stats_limit == 0 {
            return Err(ConfigError::ValidationError(
                "Stats limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
