//! dedupe core library — UI-agnostic client logic for the dedupe file store.
//!
//! `dedupe-core` holds everything a frontend needs to drive the search form
//! and the storage statistics panel, without tying itself to any particular
//! UI.
//!
//! # Modules
//!
//! - [`model`] — [`StoredFile`], [`StorageStatistics`] and the [`FileFilters`] state.
//! - [`filters`] — typed [`FilterEdit`]s, form input parsing and query encoding.
//! - [`controller`] — [`FilterStateController`], the debounced owner of the filter state.
//! - [`stats`] — [`StatsView`], size formatting and the background poller.
//! - [`service`] — service traits and the [`HttpFileService`] client.
//! - [`config`] — TOML-based client configuration.
//! - [`error`] — unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod model;
pub mod service;
pub mod stats;

pub use config::Config;
pub use controller::{ChannelSink, FilterSink, FilterStateController, DEFAULT_QUIESCENCE};
pub use error::{CoreError, CoreResult};
pub use filters::{FilterEdit, FilterField};
pub use model::{DateFilter, FileFilters, FileTypeCategory, StorageStatistics, StoredFile};
pub use service::{FileService, HttpFileService, StatisticsSource};
pub use stats::{
    format_size, savings_percentage, spawn_stats_poller, StatsMessage, StatsPoller, StatsSummary,
    StatsView, DEFAULT_REFRESH_INTERVAL,
};
