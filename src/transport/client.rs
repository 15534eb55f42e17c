//! Subgraph HTTP client
//!
//! POSTs `{ query, variables }` to the endpoint and decodes the aliased
//! `result` array. Transient failures (429, 5xx, timeouts, connection
//! errors) are retried with exponential backoff; everything that still fails
//! surfaces as a service error. Retrying lives here, inside the transport;
//! the query layer above never retries surfaced errors.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::{QueryVariables, SubgraphTransport};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the subgraph client
#[derive(Debug, Clone)]
pub struct SubgraphClientConfig {
    /// Endpoint URL the query documents are POSTed to
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for transient failures
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Rate limiter configuration, `None` disables limiting
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for SubgraphClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: format!("streamgraph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SubgraphClientConfig {
    /// Create a new config builder
    pub fn builder() -> SubgraphClientConfigBuilder {
        SubgraphClientConfigBuilder::default()
    }
}

/// Builder for subgraph client config
#[derive(Default)]
pub struct SubgraphClientConfigBuilder {
    config: SubgraphClientConfig,
}

impl SubgraphClientConfigBuilder {
    /// Set the endpoint URL
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff bounds
    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> SubgraphClientConfig {
        self.config
    }
}

/// Production transport: reqwest POST with retry and rate limiting
pub struct SubgraphClient {
    client: Client,
    config: SubgraphClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl SubgraphClient {
    /// Create a client for an endpoint with default settings
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(SubgraphClientConfig {
            endpoint: endpoint.into(),
            ..SubgraphClientConfig::default()
        })
    }

    /// Create a client with custom configuration
    pub fn with_config(config: SubgraphClientConfig) -> Result<Self> {
        Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Calculate backoff delay for a given attempt
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        std::cmp::min(
            self.config.initial_backoff * factor,
            self.config.max_backoff,
        )
    }

    async fn execute(&self, document: &str, variables: &QueryVariables) -> Result<Vec<JsonValue>> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        let max_retries = self.config.max_retries;
        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let sent = self
                .client
                .post(&self.config.endpoint)
                .json(&body)
                .send()
                .await;

            match sent {
                Ok(response) => {
                    let status = response.status();

                    if is_retryable_status(status) && attempt < max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            "subgraph returned {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::status(status.as_u16(), String::new()));
                        continue;
                    }

                    if !status.is_success() {
                        let text = response.text().await.unwrap_or_default();
                        return Err(Error::status(status.as_u16(), text));
                    }

                    let decoded: GraphqlResponse =
                        response.json().await.map_err(Error::Transport)?;
                    return unwrap_response(decoded);
                }
                Err(e) => {
                    if (e.is_timeout() || e.is_connect()) && attempt < max_retries {
                        let delay = self.backoff_delay(attempt);
                        warn!(
                            "subgraph request error ({e}), attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Transport(e));
                        continue;
                    }
                    return Err(Error::Transport(e));
                }
            }
        }

        // Exhausted all retries
        Err(last_error.unwrap_or_else(|| Error::remote("retries exhausted")))
    }
}

#[async_trait]
impl SubgraphTransport for SubgraphClient {
    async fn request(&self, document: &str, variables: QueryVariables) -> Result<Vec<JsonValue>> {
        let rows = self.execute(document, &variables).await?;
        debug!(
            rows = rows.len(),
            first = variables.first,
            "subgraph request succeeded"
        );
        Ok(rows)
    }
}

impl std::fmt::Debug for SubgraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubgraphClient")
            .field("endpoint", &self.config.endpoint)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Response decoding
// ============================================================================

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(default)]
    result: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

fn unwrap_response(response: GraphqlResponse) -> Result<Vec<JsonValue>> {
    if let Some(errors) = response.errors {
        if !errors.is_empty() {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::remote(message));
        }
    }
    match response.data {
        Some(data) => Ok(data.result),
        None => Err(Error::remote("response carried no data")),
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}
