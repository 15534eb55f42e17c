//! Listing operations
//!
//! # Overview
//!
//! [`Query`] is the handle callers use to read protocol data. One listing
//! operation per entity kind, all with the same shape and the same pipeline,
//! in order:
//!
//! 1. mode gate: ledger-only configurations fail before anything else;
//! 2. filter validation: fail fast, no request on violation;
//! 3. request construction: address filters lowercased, `first = take + 1`,
//!    last-id cursor carried as `id_gt`;
//! 4. one transport call;
//! 5. normalization of the raw rows;
//! 6. lookahead page construction.
//!
//! Exhaustive draining composes [`crate::pagination::list_all`] with any of
//! the operations bound to a fixed filter; live event feeds are in
//! [`crate::poll`].

mod documents;

use crate::config::ClientConfig;
use crate::entity::{
    AccountTokenSnapshot, Index, IndexSubscription, ProtocolEvent, RawAccountTokenSnapshot,
    RawIndex, RawIndexSubscription, RawProtocolEvent, RawStream, RawToken, Stream, Token,
};
use crate::error::{Error, Result};
use crate::filter::{
    AccountTokenSnapshotFilter, EventFilter, IndexFilter, IndexSubscriptionFilter, StreamFilter,
    TokenFilter,
};
use crate::pagination::{Identifiable, PagedResult, Paging};
use crate::poll::EventSubscription;
use crate::transport::{QueryVariables, SubgraphClient, SubgraphTransport};
use crate::types::{lowercase_address, JsonObject, JsonValue, Ordering};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Query handle over the indexed subgraph
#[derive(Clone)]
pub struct Query {
    config: ClientConfig,
    transport: Arc<dyn SubgraphTransport>,
}

impl Query {
    /// Create a query handle with the production transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = SubgraphClient::with_config(config.transport_config())?;
        Ok(Self {
            config,
            transport: Arc::new(client),
        })
    }

    /// Create a query handle over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn SubgraphTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this handle was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Checked before validation and before any network call
    fn mode_gate(&self) -> Result<()> {
        if self.config.data_mode.supports_indexed_queries() {
            Ok(())
        } else {
            Err(Error::unsupported_mode(self.config.data_mode))
        }
    }

    /// Shared tail of every listing operation: request, normalize, paginate
    async fn fetch_page<R, T>(
        &self,
        document: &str,
        mut where_clause: JsonObject,
        paging: Paging,
        ordering: Ordering,
    ) -> Result<PagedResult<T>>
    where
        R: DeserializeOwned,
        T: From<R> + Identifiable,
    {
        if let Some(last_id) = paging.last_id_value() {
            where_clause.insert("id_gt".to_string(), json!(last_id));
        }

        let variables = QueryVariables {
            where_clause,
            order_by: ordering.order_by,
            order_direction: ordering.direction,
            first: paging.take_plus_one(),
            skip: paging.skip_value(),
        };

        let rows = self.transport.request(document, variables).await?;
        debug!(rows = rows.len(), take = paging.take(), "page fetched");

        let raw: Vec<R> = serde_json::from_value(JsonValue::Array(rows))?;
        let normalized: Vec<T> = raw.into_iter().map(Into::into).collect();
        Ok(PagedResult::from_rows(normalized, &paging))
    }

    // ========================================================================
    // Listing operations
    // ========================================================================

    /// List super tokens
    pub async fn list_tokens(
        &self,
        filter: &TokenFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<Token>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("createdAtBlockNumber"));

        let mut where_clause = JsonObject::new();
        where_clause.insert("isSuperToken".to_string(), json!(true));
        insert_bool(&mut where_clause, "isListed", filter.is_listed);

        self.fetch_page::<RawToken, Token>(documents::TOKENS, where_clause, paging, ordering)
            .await
    }

    /// List distribution indexes
    pub async fn list_indexes(
        &self,
        filter: &IndexFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<Index>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("createdAtBlockNumber"));

        let mut where_clause = JsonObject::new();
        insert_string(&mut where_clause, "indexId", filter.index_id.as_deref());
        insert_address(&mut where_clause, "publisher", filter.publisher.as_deref());
        insert_address(&mut where_clause, "token", filter.token.as_deref());

        self.fetch_page::<RawIndex, Index>(documents::INDEXES, where_clause, paging, ordering)
            .await
    }

    /// List index subscriptions
    pub async fn list_index_subscriptions(
        &self,
        filter: &IndexSubscriptionFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<IndexSubscription>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("createdAtBlockNumber"));

        let mut where_clause = JsonObject::new();
        insert_address(
            &mut where_clause,
            "subscriber",
            filter.subscriber.as_deref(),
        );
        insert_bool(&mut where_clause, "approved", filter.approved);

        self.fetch_page::<RawIndexSubscription, IndexSubscription>(
            documents::INDEX_SUBSCRIPTIONS,
            where_clause,
            paging,
            ordering,
        )
        .await
    }

    /// List money streams
    pub async fn list_streams(
        &self,
        filter: &StreamFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<Stream>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("createdAtBlockNumber"));

        let mut where_clause = JsonObject::new();
        insert_address(&mut where_clause, "sender", filter.sender.as_deref());
        insert_address(&mut where_clause, "receiver", filter.receiver.as_deref());
        insert_address(&mut where_clause, "token", filter.token.as_deref());

        self.fetch_page::<RawStream, Stream>(documents::STREAMS, where_clause, paging, ordering)
            .await
    }

    /// List account/token balance snapshots
    pub async fn list_account_token_snapshots(
        &self,
        filter: &AccountTokenSnapshotFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<AccountTokenSnapshot>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("updatedAtBlockNumber"));

        let mut where_clause = JsonObject::new();
        insert_address(&mut where_clause, "account", filter.account.as_deref());
        insert_address(&mut where_clause, "token", filter.token.as_deref());

        self.fetch_page::<RawAccountTokenSnapshot, AccountTokenSnapshot>(
            documents::ACCOUNT_TOKEN_SNAPSHOTS,
            where_clause,
            paging,
            ordering,
        )
        .await
    }

    /// List protocol events
    pub async fn list_events(
        &self,
        filter: &EventFilter,
        paging: Option<Paging>,
        ordering: Option<Ordering>,
    ) -> Result<PagedResult<ProtocolEvent>> {
        self.mode_gate()?;
        filter.validate()?;

        let paging = paging.unwrap_or_default();
        let ordering = ordering.unwrap_or_else(|| Ordering::desc("blockNumber"));

        let mut where_clause = JsonObject::new();
        if let Some(account) = filter.account.as_deref() {
            where_clause.insert(
                "addresses_contains".to_string(),
                json!([lowercase_address(account)]),
            );
        }
        if let Some(timestamp_gt) = filter.timestamp_gt {
            // BigInt bounds travel as strings on the wire.
            where_clause.insert("timestamp_gt".to_string(), json!(timestamp_gt.to_string()));
        }

        self.fetch_page::<RawProtocolEvent, ProtocolEvent>(
            documents::EVENTS,
            where_clause,
            paging,
            ordering,
        )
        .await
    }

    // ========================================================================
    // Live event feed
    // ========================================================================

    /// Subscribe to new protocol events by polling.
    ///
    /// `callback` runs on every poll that found events, receiving the batch
    /// in ascending timestamp order together with the subscription handle so
    /// it can unsubscribe from inside. `interval` must be at least one
    /// second; it is measured from the completion of one poll to the start
    /// of the next, so a slow backend naturally stretches the cadence
    /// instead of piling up overlapping polls. An optional `timeout`
    /// unsubscribes automatically once elapsed.
    ///
    /// Events whose timestamp equals a poll boundary can repeat or be
    /// skipped if the backend does not apply `timestamp_gt` strictly; the
    /// window only moves forward, never back.
    pub fn on_events<F>(
        &self,
        callback: F,
        interval: Duration,
        account: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<EventSubscription>
    where
        F: FnMut(Vec<ProtocolEvent>, &EventSubscription) + Send + 'static,
    {
        crate::poll::spawn(self.clone(), callback, interval, account, timeout)
    }
}

impl std::fmt::Debug for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Query")
            .field("endpoint", &self.config.endpoint)
            .field("data_mode", &self.config.data_mode)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Where-clause construction
// ============================================================================

fn insert_bool(clause: &mut JsonObject, key: &str, value: Option<bool>) {
    if let Some(v) = value {
        clause.insert(key.to_string(), json!(v));
    }
}

fn insert_string(clause: &mut JsonObject, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        clause.insert(key.to_string(), json!(v));
    }
}

/// Address filter values are lowercased; the subgraph stores them that way
fn insert_address(clause: &mut JsonObject, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        clause.insert(key.to_string(), json!(lowercase_address(v)));
    }
}
