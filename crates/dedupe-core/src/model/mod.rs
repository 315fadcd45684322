//! Shared data types exchanged with the storage service.
//!
//! - [`file`] — stored file records and the storage statistics snapshot.
//! - [`filters`] — the filter state the search form edits.

pub mod file;
pub mod filters;

pub use file::{StorageStatistics, StoredFile};
pub use filters::{DateFilter, FileFilters, FileTypeCategory};
