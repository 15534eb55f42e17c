//! Normalized entity records
//!
//! Immutable value objects owned by the caller once returned. Each `From`
//! impl is the normalization map for one entity kind: timestamps and block
//! numbers become integers, nested references become id strings.

use super::raw::{
    RawAccountTokenSnapshot, RawFlowUpdatedEvent, RawIndex, RawIndexSubscription, RawProtocolEvent,
    RawStream, RawSubscriptionIndex, RawToken,
};
use crate::pagination::Identifiable;
use serde::Serialize;

/// Coerce a wire-encoded numeric string. The service owns the wire format;
/// garbage coerces to 0 rather than failing the whole page.
fn wire_number(value: &str) -> u64 {
    value.parse().unwrap_or_default()
}

/// A listed super token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub created_at_timestamp: u64,
    pub created_at_block_number: u64,
    pub name: String,
    pub symbol: String,
    pub is_listed: bool,
    pub underlying_address: String,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        Self {
            id: raw.id,
            created_at_timestamp: wire_number(&raw.created_at_timestamp),
            created_at_block_number: wire_number(&raw.created_at_block_number),
            name: raw.name,
            symbol: raw.symbol,
            is_listed: raw.is_listed,
            underlying_address: raw.underlying_address,
        }
    }
}

/// A distribution index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub id: String,
    pub created_at_timestamp: u64,
    pub created_at_block_number: u64,
    pub updated_at_timestamp: u64,
    pub updated_at_block_number: u64,
    pub index_id: String,
    /// Wei-scale value, kept as a string
    pub index_value: String,
    pub total_units_approved: String,
    pub total_units_pending: String,
    /// Publisher account address, flattened from the wire reference
    pub publisher: String,
    pub token: Token,
}

impl From<RawIndex> for Index {
    fn from(raw: RawIndex) -> Self {
        Self {
            id: raw.id,
            created_at_timestamp: wire_number(&raw.created_at_timestamp),
            created_at_block_number: wire_number(&raw.created_at_block_number),
            updated_at_timestamp: wire_number(&raw.updated_at_timestamp),
            updated_at_block_number: wire_number(&raw.updated_at_block_number),
            index_id: raw.index_id,
            index_value: raw.index_value,
            total_units_approved: raw.total_units_approved,
            total_units_pending: raw.total_units_pending,
            publisher: raw.publisher.id,
            token: raw.token.into(),
        }
    }
}

/// The index a subscription belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionIndex {
    pub id: String,
    pub index_id: String,
    pub token: Token,
}

impl From<RawSubscriptionIndex> for SubscriptionIndex {
    fn from(raw: RawSubscriptionIndex) -> Self {
        Self {
            id: raw.id,
            index_id: raw.index_id,
            token: raw.token.into(),
        }
    }
}

/// A subscription to a distribution index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSubscription {
    pub id: String,
    pub created_at_timestamp: u64,
    pub created_at_block_number: u64,
    pub updated_at_timestamp: u64,
    pub updated_at_block_number: u64,
    pub approved: bool,
    pub units: String,
    /// Subscriber account address, flattened from the wire reference
    pub subscriber: String,
    pub index: SubscriptionIndex,
}

impl From<RawIndexSubscription> for IndexSubscription {
    fn from(raw: RawIndexSubscription) -> Self {
        Self {
            id: raw.id,
            created_at_timestamp: wire_number(&raw.created_at_timestamp),
            created_at_block_number: wire_number(&raw.created_at_block_number),
            updated_at_timestamp: wire_number(&raw.updated_at_timestamp),
            updated_at_block_number: wire_number(&raw.updated_at_block_number),
            approved: raw.approved,
            units: raw.units,
            subscriber: raw.subscriber.id,
            index: raw.index.into(),
        }
    }
}

/// A flow-updated event carried on a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowUpdatedEvent {
    pub id: String,
    pub block_number: u64,
    pub timestamp: u64,
    pub flow_rate: String,
}

impl From<RawFlowUpdatedEvent> for FlowUpdatedEvent {
    fn from(raw: RawFlowUpdatedEvent) -> Self {
        Self {
            id: raw.id,
            block_number: wire_number(&raw.block_number),
            timestamp: wire_number(&raw.timestamp),
            flow_rate: raw.flow_rate,
        }
    }
}

/// A money stream between two accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub created_at_timestamp: u64,
    pub created_at_block_number: u64,
    pub updated_at_timestamp: u64,
    pub updated_at_block_number: u64,
    pub current_flow_rate: String,
    pub streamed_until_updated_at: String,
    /// Sender account address, flattened from the wire reference
    pub sender: String,
    /// Receiver account address, flattened from the wire reference
    pub receiver: String,
    pub token: Token,
    pub flow_updated_events: Vec<FlowUpdatedEvent>,
}

impl From<RawStream> for Stream {
    fn from(raw: RawStream) -> Self {
        Self {
            id: raw.id,
            created_at_timestamp: wire_number(&raw.created_at_timestamp),
            created_at_block_number: wire_number(&raw.created_at_block_number),
            updated_at_timestamp: wire_number(&raw.updated_at_timestamp),
            updated_at_block_number: wire_number(&raw.updated_at_block_number),
            current_flow_rate: raw.current_flow_rate,
            streamed_until_updated_at: raw.streamed_until_updated_at,
            sender: raw.sender.id,
            receiver: raw.receiver.id,
            token: raw.token.into(),
            flow_updated_events: raw
                .flow_updated_events
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// A per-account, per-token balance snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTokenSnapshot {
    pub id: String,
    pub updated_at_timestamp: u64,
    pub updated_at_block_number: u64,
    pub total_number_of_active_streams: i64,
    pub total_number_of_closed_streams: i64,
    pub total_net_flow_rate: String,
    pub balance_until_updated_at: String,
    /// Account address, flattened from the wire reference
    pub account: String,
    pub token: Token,
}

impl From<RawAccountTokenSnapshot> for AccountTokenSnapshot {
    fn from(raw: RawAccountTokenSnapshot) -> Self {
        Self {
            id: raw.id,
            updated_at_timestamp: wire_number(&raw.updated_at_timestamp),
            updated_at_block_number: wire_number(&raw.updated_at_block_number),
            total_number_of_active_streams: raw.total_number_of_active_streams,
            total_number_of_closed_streams: raw.total_number_of_closed_streams,
            total_net_flow_rate: raw.total_net_flow_rate,
            balance_until_updated_at: raw.balance_until_updated_at,
            account: raw.account.id,
            token: raw.token.into(),
        }
    }
}

/// A protocol event row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolEvent {
    pub id: String,
    pub name: String,
    pub block_number: u64,
    pub timestamp: u64,
    pub transaction_hash: String,
    /// Accounts the event touches
    pub addresses: Vec<String>,
}

impl From<RawProtocolEvent> for ProtocolEvent {
    fn from(raw: RawProtocolEvent) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            block_number: wire_number(&raw.block_number),
            timestamp: wire_number(&raw.timestamp),
            transaction_hash: raw.transaction_hash,
            addresses: raw.addresses,
        }
    }
}

// ============================================================================
// Identifiable
// ============================================================================

impl Identifiable for Token {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Index {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for IndexSubscription {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Stream {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for AccountTokenSnapshot {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for ProtocolEvent {
    fn id(&self) -> &str {
        &self.id
    }
}
