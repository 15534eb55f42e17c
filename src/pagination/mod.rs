//! Pagination module
//!
//! Supports: skip (offset) and last-id (seek) cursors
//!
//! # Overview
//!
//! The pagination module provides the cursor machinery shared by every listing
//! operation: the [`Paging`] cursor sum type, the one-extra-row lookahead that
//! detects a further page without a count query, and [`list_all`], which drains
//! a paged query to completion.

mod lister;
mod types;

pub use lister::{list_all, EXHAUSTIVE_PAGE_SIZE};
pub use types::{Identifiable, PagedResult, Paging, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
