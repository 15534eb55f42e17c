//! Polled event subscriptions
//!
//! # Overview
//!
//! The subgraph speaks request/response only; this module emulates an event
//! feed on top of it. Each subscription owns one tokio task that repeatedly
//! drains the event listing above a moving timestamp cursor, invokes the
//! callback with whatever appeared, and re-arms its timer only after the
//! step completes. Cancellation is cooperative: a shared flag checked at the
//! top of every step, so polls never overlap and an unsubscribed loop stops
//! without further work.

use crate::entity::ProtocolEvent;
use crate::error::{Error, Result};
use crate::filter::EventFilter;
use crate::pagination::list_all;
use crate::query::Query;
use crate::types::Ordering;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Hard floor on the polling interval, protecting the backend
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Backward offset applied to the initial time cursor.
///
/// The indexing service stamps events with the ledger event's timestamp, not
/// ingestion time, so rows can appear with timestamps behind wall-clock now.
/// Starting the window this far back keeps events near subscription start
/// from being missed.
pub const CLOCK_SKEW_ALLOWANCE: Duration = Duration::from_secs(25);

/// Handle to a live event subscription.
///
/// Cloneable; all clones share the same cancellation state. Dropping the
/// handle does not cancel the subscription; call [`unsubscribe`] for that.
///
/// [`unsubscribe`]: EventSubscription::unsubscribe
#[derive(Debug, Clone)]
pub struct EventSubscription {
    active: Arc<AtomicBool>,
}

impl EventSubscription {
    fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the subscription is still polling
    pub fn is_active(&self) -> bool {
        self.active.load(AtomicOrdering::SeqCst)
    }

    /// Stop the subscription. Idempotent; the polling loop observes the flag
    /// at the top of its next step and schedules nothing further. A step
    /// already past that check may deliver one final callback.
    pub fn unsubscribe(&self) {
        self.active.store(false, AtomicOrdering::SeqCst);
    }
}

/// Start the polling task backing [`Query::on_events`]
pub(crate) fn spawn<F>(
    query: Query,
    mut callback: F,
    interval: Duration,
    account: Option<String>,
    timeout: Option<Duration>,
) -> Result<EventSubscription>
where
    F: FnMut(Vec<ProtocolEvent>, &EventSubscription) + Send + 'static,
{
    if interval < MIN_POLL_INTERVAL {
        return Err(Error::invalid_argument(format!(
            "polling interval must be at least {MIN_POLL_INTERVAL:?}, got {interval:?}"
        )));
    }

    // Fail on a bad account now rather than on every poll step.
    EventFilter {
        account: account.clone(),
        timestamp_gt: None,
    }
    .validate()?;

    let subscription = EventSubscription::new();

    let handle = subscription.clone();
    tokio::spawn(async move {
        let skew = CLOCK_SKEW_ALLOWANCE.as_secs() as i64;
        let mut time_cursor = Utc::now().timestamp() - skew;

        loop {
            if !handle.is_active() {
                debug!("subscription cancelled, polling stopped");
                break;
            }

            let filter = EventFilter {
                account: account.clone(),
                timestamp_gt: Some(time_cursor),
            };

            // Ascending order is load-bearing: the cursor advances to the
            // timestamp of the last event in the batch.
            let step = list_all(|paging| {
                let query = query.clone();
                let filter = filter.clone();
                async move {
                    query
                        .list_events(&filter, Some(paging), Some(Ordering::asc("timestamp")))
                        .await
                }
            })
            .await;

            match step {
                Ok(events) if !events.is_empty() => {
                    let newest = events.last().map(|e| e.timestamp as i64);
                    callback(events, &handle);
                    if let Some(ts) = newest {
                        time_cursor = ts;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    // Step failures keep the subscription alive; the next
                    // tick retries at normal cadence.
                    warn!(error = %err, "event poll step failed");
                }
            }

            // Measured from step completion, so slow polls stretch the
            // cadence instead of overlapping.
            tokio::time::sleep(interval).await;
        }
    });

    if let Some(timeout) = timeout {
        let handle = subscription.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            debug!("subscription timeout elapsed, unsubscribing");
            handle.unsubscribe();
        });
    }

    Ok(subscription)
}
