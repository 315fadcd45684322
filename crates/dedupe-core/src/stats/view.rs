//! Projection of the latest statistics snapshot for display.

use std::fmt;

use crate::model::StorageStatistics;
use crate::stats::format::{format_size, savings_percentage};
use crate::stats::poller::StatsMessage;

/// What the statistics panel currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatsView {
    /// No snapshot has arrived yet.
    #[default]
    Loading,
    /// The most recently received snapshot.
    Ready(StorageStatistics),
}

impl StatsView {
    /// Replaces whatever is shown with `snapshot`.
    pub fn update(&mut self, snapshot: StorageStatistics) {
        *self = StatsView::Ready(snapshot);
    }

    /// Folds a poller message into the view.
    ///
    /// Failed fetches leave the current snapshot (or the loading state) in
    /// place. Returns `true` if the view changed.
    pub fn handle_message(&mut self, message: StatsMessage) -> bool {
        match message {
            StatsMessage::Updated(snapshot) => {
                let changed = self.snapshot() != Some(&snapshot);
                self.update(snapshot);
                changed
            }
            StatsMessage::FetchFailed(error) => {
                tracing::warn!(%error, "statistics refresh failed, keeping last snapshot");
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StatsView::Loading)
    }

    pub fn snapshot(&self) -> Option<&StorageStatistics> {
        match self {
            StatsView::Loading => None,
            StatsView::Ready(stats) => Some(stats),
        }
    }

    pub fn summary(&self) -> Option<StatsSummary> {
        self.snapshot().map(StatsSummary::from_statistics)
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Storage Statistics")?;
        match self.summary() {
            None => writeln!(f, "  loading..."),
            Some(summary) => {
                for (label, value) in summary.rows() {
                    writeln!(f, "  {label:<16} {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Display-ready figures derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_files: u64,
    pub duplicate_files: u64,
    pub total_storage: String,
    pub storage_saved: String,
    pub savings_percentage: String,
    pub last_updated: String,
}

impl StatsSummary {
    pub fn from_statistics(stats: &StorageStatistics) -> Self {
        Self {
            total_files: stats.total_files,
            duplicate_files: stats.duplicate_files,
            total_storage: format_size(stats.total_size),
            storage_saved: format_size(stats.saved_size),
            savings_percentage: savings_percentage(stats.total_size, stats.saved_size),
            last_updated: stats.last_updated.clone(),
        }
    }

    /// The four labelled panel rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Total Files", self.total_files.to_string()),
            ("Duplicate Files", self.duplicate_files.to_string()),
            ("Total Storage", self.total_storage.clone()),
            (
                "Storage Saved",
                format!("{} ({}%)", self.storage_saved, self.savings_percentage),
            ),
        ]
    }
}
