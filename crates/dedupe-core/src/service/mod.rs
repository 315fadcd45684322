//! Access to the storage service.
//!
//! Hashing and deduplication happen on the service; this module describes
//! the calls the client makes and provides an HTTP implementation of them.

pub mod http;

use std::path::Path;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::model::{FileFilters, StorageStatistics, StoredFile};

pub use http::HttpFileService;

/// Anything that can produce a fresh statistics snapshot.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    async fn fetch_statistics(&self) -> CoreResult<StorageStatistics>;
}

/// Listing, upload and removal of stored files.
#[async_trait]
pub trait FileService: StatisticsSource {
    /// Lists the files matching `filters`, newest upload first.
    async fn list_files(&self, filters: &FileFilters) -> CoreResult<Vec<StoredFile>>;

    /// Uploads the file at `path`.
    ///
    /// The returned record has `is_duplicate` set when the service already
    /// held identical content.
    async fn upload_file(&self, path: &Path) -> CoreResult<StoredFile>;

    /// Removes the file record with `id`.
    async fn delete_file(&self, id: Uuid) -> CoreResult<()>;
}
