//! File records and storage statistics as returned by the service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single uploaded file as listed by the storage service.
///
/// Duplicates share the stored blob of their original; `duplicate_of`
/// points at that original's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: Uuid,
    pub original_filename: String,
    pub file_type: String,
    pub size: u64,
    pub uploaded_at: String,
    /// URL of the stored blob.
    pub file: String,
    pub is_duplicate: bool,
    pub duplicate_of: Option<Uuid>,
}

impl StoredFile {
    /// Returns `true` if this record is the original copy of its content.
    pub fn is_original(&self) -> bool {
        !self.is_duplicate
    }
}

/// Aggregate storage figures for the whole service.
///
/// A snapshot is always replaced as a whole; there are no partial updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageStatistics {
    pub total_files: u64,
    pub duplicate_files: u64,
    /// Sum of all file sizes in bytes, duplicates included.
    pub total_size: u64,
    /// Bytes not stored thanks to deduplication.
    pub saved_size: u64,
    pub last_updated: String,
}
