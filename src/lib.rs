//! # streamgraph
//!
//! A Rust client for the indexed subgraph of a money-streaming ledger
//! protocol: paginated, filterable listings of protocol entities plus a
//! polled live event feed.
//!
//! ## Features
//!
//! - **Two cursor strategies**: offset (skip) and seek (last-id) paging,
//!   with one-extra-row lookahead instead of count queries
//! - **Exhaustive listing**: drain any filtered query to completion
//! - **Live event feed**: request/response polling dressed up as a
//!   subscription, with clock-skew tolerance and self-correcting cadence
//! - **Typed records**: wire strings and nested references normalized into
//!   owned value objects
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use streamgraph::{ClientConfig, Paging, Query, StreamFilter};
//!
//! #[tokio::main]
//! async fn main() -> streamgraph::Result<()> {
//!     let query = Query::new(ClientConfig::new(
//!         "https://indexer.example/subgraphs/protocol",
//!     ))?;
//!
//!     // One page of streams sent by an account
//!     let filter = StreamFilter {
//!         sender: Some("0x...".to_string()),
//!         ..Default::default()
//!     };
//!     let page = query.list_streams(&filter, None, None).await?;
//!     if let Some(next) = page.next_paging {
//!         let _more = query.list_streams(&filter, Some(next), None).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Query                               │
//! │  list_tokens  list_indexes  list_streams  ...   on_events   │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬──────────────┬───┴──────────┬────────────────────┐
//! │  Filter  │  Pagination  │  Transport   │       Poll         │
//! ├──────────┼──────────────┼──────────────┼────────────────────┤
//! │ Validate │ Skip cursor  │ POST + retry │ Time cursor        │
//! │ Lowercase│ LastId cursor│ Backoff      │ Clock-skew seed    │
//! │          │ Lookahead    │ Rate limit   │ Cooperative cancel │
//! │          │ list_all     │              │ Timeout            │
//! └──────────┴──────────────┴──────────────┴────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(missing_docs)] // TODO: document raw wire record fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Cursors, pages and exhaustive listing
pub mod pagination;

/// Remote query transport
pub mod transport;

/// Raw and normalized protocol entities
pub mod entity;

/// Listing filters and validation
pub mod filter;

/// Listing operations
pub mod query;

/// Polled event subscriptions
pub mod poll;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use entity::{
    AccountTokenSnapshot, FlowUpdatedEvent, Index, IndexSubscription, ProtocolEvent, Stream, Token,
};
pub use error::{Error, ErrorKind, Result};
pub use filter::{
    AccountTokenSnapshotFilter, EventFilter, IndexFilter, IndexSubscriptionFilter, StreamFilter,
    TokenFilter,
};
pub use pagination::{list_all, PagedResult, Paging};
pub use poll::EventSubscription;
pub use query::Query;
pub use types::{DataMode, OrderDirection, Ordering};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
