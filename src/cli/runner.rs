//! Command execution

use super::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::filter::{
    AccountTokenSnapshotFilter, EventFilter, IndexFilter, IndexSubscriptionFilter, StreamFilter,
    TokenFilter,
};
use crate::pagination::{list_all, PagedResult, Paging};
use crate::query::Query;
use anyhow::{bail, Context};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the requested command
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.resolve_config()?;
        let query = Query::new(config)?;

        let take = self.cli.take;
        let all = self.cli.all;

        match self.cli.command {
            Commands::Tokens { listed } => {
                let filter = TokenFilter { is_listed: listed };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move { query.list_tokens(&filter, Some(paging), None).await }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_tokens(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Indexes {
                publisher,
                token,
                index_id,
            } => {
                let filter = IndexFilter {
                    index_id,
                    publisher,
                    token,
                };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move { query.list_indexes(&filter, Some(paging), None).await }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_indexes(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Subscriptions {
                subscriber,
                approved,
            } => {
                let filter = IndexSubscriptionFilter {
                    subscriber,
                    approved,
                };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move {
                            query
                                .list_index_subscriptions(&filter, Some(paging), None)
                                .await
                        }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_index_subscriptions(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Streams {
                sender,
                receiver,
                token,
            } => {
                let filter = StreamFilter {
                    sender,
                    receiver,
                    token,
                };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move { query.list_streams(&filter, Some(paging), None).await }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_streams(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Snapshots { account, token } => {
                let filter = AccountTokenSnapshotFilter { account, token };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move {
                            query
                                .list_account_token_snapshots(&filter, Some(paging), None)
                                .await
                        }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_account_token_snapshots(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Events { account, since } => {
                let filter = EventFilter {
                    account,
                    timestamp_gt: since,
                };
                if all {
                    let rows = list_all(|paging| {
                        let query = query.clone();
                        let filter = filter.clone();
                        async move { query.list_events(&filter, Some(paging), None).await }
                    })
                    .await?;
                    print_rows(&rows)
                } else {
                    let page = query
                        .list_events(&filter, Some(Paging::skip(take)), None)
                        .await?;
                    print_page(&page)
                }
            }

            Commands::Watch {
                account,
                interval,
                timeout,
            } => {
                let subscription = query.on_events(
                    |events, _sub| {
                        for event in events {
                            if let Ok(line) = serde_json::to_string(&event) {
                                println!("{line}");
                            }
                        }
                    },
                    Duration::from_secs(interval),
                    account,
                    timeout.map(Duration::from_secs),
                )?;

                info!("watching for protocol events, ctrl-c to stop");
                loop {
                    if !subscription.is_active() {
                        break;
                    }
                    tokio::select! {
                        _ = tokio::signal::ctrl_c() => {
                            subscription.unsubscribe();
                            break;
                        }
                        () = tokio::time::sleep(Duration::from_millis(500)) => {}
                    }
                }
                Ok(())
            }
        }
    }

    fn resolve_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => match &self.cli.endpoint {
                Some(endpoint) => ClientConfig::new(endpoint),
                None => bail!("either --endpoint or --config is required"),
            },
        };
        if let Some(endpoint) = &self.cli.endpoint {
            config.endpoint = endpoint.clone();
        }
        Ok(config)
    }
}

fn print_rows<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn print_page<T: Serialize>(page: &PagedResult<T>) -> anyhow::Result<()> {
    print_rows(&page.data)?;
    if page.has_next() {
        info!("more rows available, rerun with --all to fetch every page");
    }
    Ok(())
}
