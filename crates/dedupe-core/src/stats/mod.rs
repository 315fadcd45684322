//! Storage statistics panel.
//!
//! - [`format`] — byte-count and savings formatting.
//! - [`view`] — the loading/ready projection of the latest snapshot.
//! - [`poller`] — background refresh on a fixed interval.

pub mod format;
pub mod poller;
pub mod view;

pub use format::{format_size, savings_percentage};
pub use poller::{spawn_stats_poller, StatsMessage, StatsPoller, DEFAULT_REFRESH_INTERVAL};
pub use view::{StatsSummary, StatsView};
