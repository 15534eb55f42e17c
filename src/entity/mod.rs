//! Protocol entities
//!
//! Each entity kind exists in two shapes: the raw wire record exactly as the
//! subgraph serializes it (numeric fields wire-encoded as strings, references
//! as nested `{ "id": ... }` objects) and the normalized record handed to
//! callers. Normalization is a pure per-kind transform following two fixed
//! rules:
//!
//! 1. timestamp and block-number fields are coerced from string to integer;
//! 2. nested reference objects are flattened to their id string.
//!
//! Big-number token amounts (wei-scale) stay strings; only timestamps and
//! block numbers are coerced. A new entity kind follows the same two rules.

mod raw;
mod records;

pub use raw::{
    AccountRef, RawAccountTokenSnapshot, RawFlowUpdatedEvent, RawIndex, RawIndexSubscription,
    RawProtocolEvent, RawStream, RawSubscriptionIndex, RawToken,
};
pub use records::{
    AccountTokenSnapshot, FlowUpdatedEvent, Index, IndexSubscription, ProtocolEvent, Stream,
    SubscriptionIndex, Token,
};
