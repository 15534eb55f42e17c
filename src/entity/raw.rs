//! Raw wire records
//!
//! Deserialized verbatim from the subgraph response. The indexing service
//! encodes every uint256-backed field as a string, including timestamps and
//! block numbers, and expands referenced entities to `{ "id": ... }` objects.

use serde::Deserialize;

/// A referenced entity, carried on the wire as `{ "id": "0x..." }`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRef {
    /// Referenced entity id
    pub id: String,
}

/// Wire shape of a listed super token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawToken {
    pub id: String,
    pub created_at_timestamp: String,
    pub created_at_block_number: String,
    pub name: String,
    pub symbol: String,
    pub is_listed: bool,
    pub underlying_address: String,
}

/// Wire shape of a distribution index
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndex {
    pub id: String,
    pub created_at_timestamp: String,
    pub created_at_block_number: String,
    pub updated_at_timestamp: String,
    pub updated_at_block_number: String,
    pub index_id: String,
    pub index_value: String,
    pub total_units_approved: String,
    pub total_units_pending: String,
    pub publisher: AccountRef,
    pub token: RawToken,
}

/// The index a subscription belongs to, as nested in subscription rows
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubscriptionIndex {
    pub id: String,
    pub index_id: String,
    pub token: RawToken,
}

/// Wire shape of an index subscription
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndexSubscription {
    pub id: String,
    pub created_at_timestamp: String,
    pub created_at_block_number: String,
    pub updated_at_timestamp: String,
    pub updated_at_block_number: String,
    pub approved: bool,
    pub units: String,
    pub subscriber: AccountRef,
    pub index: RawSubscriptionIndex,
}

/// A flow-updated event nested inside a stream row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFlowUpdatedEvent {
    pub id: String,
    pub block_number: String,
    pub timestamp: String,
    pub flow_rate: String,
}

/// Wire shape of a money stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStream {
    pub id: String,
    pub created_at_timestamp: String,
    pub created_at_block_number: String,
    pub updated_at_timestamp: String,
    pub updated_at_block_number: String,
    pub current_flow_rate: String,
    pub streamed_until_updated_at: String,
    pub sender: AccountRef,
    pub receiver: AccountRef,
    pub token: RawToken,
    #[serde(default)]
    pub flow_updated_events: Vec<RawFlowUpdatedEvent>,
}

/// Wire shape of a per-account, per-token balance snapshot
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAccountTokenSnapshot {
    pub id: String,
    pub updated_at_timestamp: String,
    pub updated_at_block_number: String,
    pub total_number_of_active_streams: i64,
    pub total_number_of_closed_streams: i64,
    pub total_net_flow_rate: String,
    pub balance_until_updated_at: String,
    pub account: AccountRef,
    pub token: RawToken,
}

/// Wire shape of a protocol event
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProtocolEvent {
    pub id: String,
    pub name: String,
    pub block_number: String,
    pub timestamp: String,
    pub transaction_hash: String,
    #[serde(default)]
    pub addresses: Vec<String>,
}
