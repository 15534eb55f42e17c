//! Listing filters
//!
//! One filter struct per entity kind, each with shape/range validation that
//! runs before any network call. Address-like fields must be 20-byte hex
//! addresses; they are lowercased at request-construction time, not here.

mod types;
mod validation;

pub use types::{
    AccountTokenSnapshotFilter, EventFilter, IndexFilter, IndexSubscriptionFilter, StreamFilter,
    TokenFilter,
};

#[cfg(test)]
mod tests;
