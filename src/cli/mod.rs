//! CLI module
//!
//! Command-line interface over the query layer.
//!
//! # Commands
//!
//! - `tokens` / `indexes` / `subscriptions` / `streams` / `snapshots` /
//!   `events` - list one entity kind, one page or exhaustively
//! - `watch` - tail protocol events live via the poller

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
