//! Client configuration
//!
//! `ClientConfig` is the user-facing knob set: where the subgraph lives,
//! which data mode the client runs in, and transport tuning. It
//! deserializes from YAML or JSON files for the CLI.

use crate::error::{Error, Result};
use crate::transport::{RateLimiterConfig, SubgraphClientConfig};
use crate::types::DataMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Configuration for a [`crate::query::Query`] handle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Subgraph endpoint URL
    pub endpoint: String,

    /// Data mode; `ledger_only` disables every indexed query
    #[serde(default)]
    pub data_mode: DataMode,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum transport-level retries for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Cap outgoing requests per second; `None` disables rate limiting
    #[serde(default)]
    pub requests_per_second: Option<u32>,
}

impl ClientConfig {
    /// Create a config for an endpoint with default settings
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            data_mode: DataMode::default(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
            requests_per_second: None,
        }
    }

    /// Set the data mode
    #[must_use]
    pub fn with_data_mode(mut self, mode: DataMode) -> Self {
        self.data_mode = mode;
        self
    }

    /// Load from a YAML or JSON file, chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents)?,
            Some("yaml" | "yml") => serde_yaml::from_str(&contents)?,
            other => {
                return Err(Error::config(format!(
                    "unsupported config extension {other:?}, expected yaml, yml or json"
                )))
            }
        };
        if config.endpoint.is_empty() {
            return Err(Error::config("endpoint must not be empty"));
        }
        Ok(config)
    }

    /// The transport configuration this client config implies
    pub fn transport_config(&self) -> SubgraphClientConfig {
        SubgraphClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            max_retries: self.max_retries,
            rate_limit: self
                .requests_per_second
                .map(|rps| RateLimiterConfig::new(rps, rps)),
            ..SubgraphClientConfig::default()
        }
    }
}
