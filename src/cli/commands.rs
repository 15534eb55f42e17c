//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// streamgraph CLI
#[derive(Parser, Debug)]
#[command(name = "streamgraph")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subgraph endpoint URL
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Configuration file (YAML or JSON); flags override its values
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Page size for listing commands
    #[arg(short, long, global = true, default_value = "100")]
    pub take: u32,

    /// Fetch every page instead of the first one
    #[arg(long, global = true)]
    pub all: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List super tokens
    Tokens {
        /// Only tokens on (true) or off (false) the canonical list
        #[arg(long)]
        listed: Option<bool>,
    },

    /// List distribution indexes
    Indexes {
        /// Publisher account address
        #[arg(long)]
        publisher: Option<String>,

        /// Token address
        #[arg(long)]
        token: Option<String>,

        /// Publisher-chosen index id
        #[arg(long)]
        index_id: Option<String>,
    },

    /// List index subscriptions
    Subscriptions {
        /// Subscriber account address
        #[arg(long)]
        subscriber: Option<String>,

        /// Only approved (true) or pending (false) subscriptions
        #[arg(long)]
        approved: Option<bool>,
    },

    /// List money streams
    Streams {
        /// Sender account address
        #[arg(long)]
        sender: Option<String>,

        /// Receiver account address
        #[arg(long)]
        receiver: Option<String>,

        /// Token address
        #[arg(long)]
        token: Option<String>,
    },

    /// List account/token balance snapshots
    Snapshots {
        /// Account address
        #[arg(long)]
        account: Option<String>,

        /// Token address
        #[arg(long)]
        token: Option<String>,
    },

    /// List protocol events
    Events {
        /// Only events touching this account
        #[arg(long)]
        account: Option<String>,

        /// Only events strictly newer than this epoch second
        #[arg(long)]
        since: Option<i64>,
    },

    /// Tail protocol events live
    Watch {
        /// Only events touching this account
        #[arg(long)]
        account: Option<String>,

        /// Seconds between polls
        #[arg(long, default_value = "5")]
        interval: u64,

        /// Stop automatically after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}
