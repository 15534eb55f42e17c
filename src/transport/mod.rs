//! Remote query transport
//!
//! # Overview
//!
//! The transport module carries one bounded request to the indexed query
//! service and hands back the raw rows. [`SubgraphTransport`] is the seam the
//! query layer depends on; [`SubgraphClient`] is the production
//! implementation: a reqwest POST client with retry, backoff and optional
//! rate limiting. Tests substitute scripted transports through the trait.

mod client;
mod rate_limit;

pub use client::{SubgraphClient, SubgraphClientConfig, SubgraphClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

use crate::error::Result;
use crate::types::{JsonObject, JsonValue, OrderDirection};
use async_trait::async_trait;
use serde::Serialize;

/// Variables object sent with every listing request.
///
/// `first` always carries `take + 1` (the lookahead row); `skip` is present
/// only for offset paging; the last-id cursor travels inside `where` as
/// `id_gt`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables {
    /// Entity-specific filter object
    #[serde(rename = "where")]
    pub where_clause: JsonObject,
    /// Field the remote service sorts by
    pub order_by: String,
    /// Sort direction
    pub order_direction: OrderDirection,
    /// Row count to return, including the lookahead row
    pub first: u32,
    /// Offset, for skip paging only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
}

/// One bounded request to the remote query service.
///
/// Implementations return the aliased `result` array of raw records; every
/// failure surfaces as a service-classified error.
#[async_trait]
pub trait SubgraphTransport: Send + Sync {
    /// Execute a query document with the given variables
    async fn request(&self, document: &str, variables: QueryVariables) -> Result<Vec<JsonValue>>;
}

#[cfg(test)]
mod tests;
