//! Filter state edited by the search form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upload-date constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    /// Uploaded on the current calendar day.
    Today,
    /// Uploaded within the last 7 days.
    Week,
    /// Uploaded within the last 30 days.
    Month,
    /// Bounded by `start_date` / `end_date`.
    Custom,
}

impl DateFilter {
    /// All variants in form order.
    pub const ALL: [DateFilter; 4] = [Self::Today, Self::Week, Self::Month, Self::Custom];

    /// The value sent to the service and used by the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::Custom => "custom",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Last Week",
            Self::Month => "Last Month",
            Self::Custom => "Custom Range",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput {
                field: "date_filter",
                value: s.to_string(),
            })
    }
}

/// The file-type categories the search form offers.
///
/// The filter itself stores a plain MIME prefix string; these are the
/// prefixes the form knows how to label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileTypeCategory {
    Images,
    Pdf,
    Text,
    Documents,
}

impl FileTypeCategory {
    /// All variants in form order.
    pub const ALL: [FileTypeCategory; 4] = [Self::Images, Self::Pdf, Self::Text, Self::Documents];

    pub fn mime_prefix(self) -> &'static str {
        match self {
            Self::Images => "image/",
            Self::Pdf => "application/pdf",
            Self::Text => "text/",
            Self::Documents => "application/",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Pdf => "PDF",
            Self::Text => "Text",
            Self::Documents => "Documents",
        }
    }

    /// Looks up the category for an exact MIME prefix.
    pub fn from_mime_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.mime_prefix() == prefix)
    }
}

/// The complete search/filter state.
///
/// `start_date` and `end_date` only mean something while `date_filter` is
/// [`DateFilter::Custom`]; consumers must ignore them otherwise. Sizes are
/// in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl FileFilters {
    /// Returns `true` when no field constrains the listing.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
        blank(&self.search)
            && blank(&self.file_type)
            && self.min_size.is_none()
            && self.max_size.is_none()
            && self.date_filter.is_none()
    }

    /// Returns `true` if the custom date inputs should be shown.
    pub fn has_custom_range(&self) -> bool {
        self.date_filter == Some(DateFilter::Custom)
    }

    /// The known category for the current `file_type`, if any.
    pub fn file_type_category(&self) -> Option<FileTypeCategory> {
        self.file_type
            .as_deref()
            .and_then(FileTypeCategory::from_mime_prefix)
    }
}
