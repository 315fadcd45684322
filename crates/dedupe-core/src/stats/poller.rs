//! Periodic statistics refresh.
//!
//! [`spawn_stats_poller`] fetches a snapshot immediately and then once per
//! interval, forwarding results to the main loop through an unbounded mpsc
//! channel. The poller stops when its handle is dropped or the receiver
//! goes away.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::model::StorageStatistics;
use crate::service::StatisticsSource;

/// Refresh interval used when none is configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(5000);

const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// Messages sent from the poller to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsMessage {
    Updated(StorageStatistics),
    FetchFailed(String),
}

/// Handle to a running poller. Dropping it stops the polling task.
#[derive(Debug)]
pub struct StatsPoller {
    handle: JoinHandle<()>,
}

impl StatsPoller {
    /// Stops polling. Safe to call after the task has already ended.
    pub fn stop(self) {
        self.handle.abort();
        tracing::debug!("statistics poller stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for StatsPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawns a task that polls `source` every `interval`.
///
/// The first fetch happens right away. A fetch that fails is reported as
/// [`StatsMessage::FetchFailed`] and polling carries on.
///
/// # Panics
///
/// Panics if called outside the context of a Tokio runtime.
pub fn spawn_stats_poller<S>(
    source: Arc<S>,
    interval: Duration,
    tx: UnboundedSender<StatsMessage>,
) -> StatsPoller
where
    S: StatisticsSource + ?Sized + 'static,
{
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(MIN_REFRESH_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let message = match source.fetch_statistics().await {
                Ok(stats) => {
                    tracing::debug!(total_files = stats.total_files, "statistics refreshed");
                    StatsMessage::Updated(stats)
                }
                Err(e) => StatsMessage::FetchFailed(e.to_string()),
            };
            if tx.send(message).is_err() {
                tracing::debug!("statistics receiver closed, stopping poller");
                break;
            }
        }
    });
    StatsPoller { handle }
}
