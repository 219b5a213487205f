//! Dataset loading.
//!
//! Fetches the replay dataset — a JSON array of match records — from a URL
//! or a local file, once per run. A load failure is fatal to the run; no
//! retry happens here. Static hosts are known to serve stale JSON, so URL
//! loads append a cache-busting query parameter instead of caching.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::MatchRecord;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A loaded dataset: the full ordered record sequence plus provenance.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Match records in dataset order
    pub records: Vec<MatchRecord>,

    /// Where the records came from (URL or file path)
    pub source: String,

    /// When the load happened
    pub loaded_at: DateTime<Utc>,
}

/// Configuration for the dataset loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("replay-meta/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Loads the match dataset over HTTP or from disk.
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    /// Create a new loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("replay-meta/0.1.0")),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Create a loader with default configuration.
    pub fn with_defaults() -> Result<Self, LoadError> {
        Self::new(LoaderConfig::default())
    }

    /// Fetch and parse the dataset from a URL.
    pub async fn load_url(&self, url: &Url) -> Result<Dataset, LoadError> {
        let mut fetch_url = url.clone();
        fetch_url
            .query_pairs_mut()
            .append_pair("cb", &Utc::now().timestamp_millis().to_string());

        info!("Fetching dataset from {}", url);
        let response = self.client.get(fetch_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        let records: Vec<MatchRecord> = serde_json::from_slice(&body)?;
        debug!("Parsed {} match records", records.len());

        Ok(Dataset {
            records,
            source: url.to_string(),
            loaded_at: Utc::now(),
        })
    }

    /// Parse the dataset from a local JSON file.
    pub async fn load_file(&self, path: &Path) -> Result<Dataset, LoadError> {
        info!("Loading dataset from {}", path.display());
        let body = tokio::fs::read(path).await?;
        let records: Vec<MatchRecord> = serde_json::from_slice(&body)?;
        debug!("Parsed {} match records", records.len());

        Ok(Dataset {
            records,
            source: path.display().to_string(),
            loaded_at: Utc::now(),
        })
    }
}
