//! Conversion of raw form input into [`FilterEdit`]s.
//!
//! This is the input layer that sits in front of the filter controller.
//! Size inputs are typed in kilobytes and stored in bytes; the date
//! selector's empty option means "no date filter".

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::filters::edit::FilterEdit;

const BYTES_PER_KB: u64 = 1024;

/// The fields of the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    FileType,
    MinSize,
    MaxSize,
    DateFilter,
    StartDate,
    EndDate,
}

impl FilterField {
    pub const ALL: [FilterField; 7] = [
        Self::Search,
        Self::FileType,
        Self::MinSize,
        Self::MaxSize,
        Self::DateFilter,
        Self::StartDate,
        Self::EndDate,
    ];

    /// The snake_case key shared with the service's query parameters.
    pub fn key(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::FileType => "file_type",
            Self::MinSize => "min_size",
            Self::MaxSize => "max_size",
            Self::DateFilter => "date_filter",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
        }
    }

    /// Turns the text of this form field into an edit.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidInput`] if a size is not a non-negative whole
    ///   number of kilobytes, or the date filter is not one of the known
    ///   options.
    pub fn parse_input(self, raw: &str) -> CoreResult<FilterEdit> {
        let edit = match self {
            Self::Search => FilterEdit::Search(raw.to_string()),
            Self::FileType => FilterEdit::FileType(raw.to_string()),
            Self::MinSize => FilterEdit::MinSize(self.parse_kilobytes(raw)?),
            Self::MaxSize => FilterEdit::MaxSize(self.parse_kilobytes(raw)?),
            Self::DateFilter => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    FilterEdit::DateFilter(None)
                } else {
                    FilterEdit::DateFilter(Some(trimmed.parse()?))
                }
            }
            Self::StartDate => FilterEdit::StartDate(raw.to_string()),
            Self::EndDate => FilterEdit::EndDate(raw.to_string()),
        };
        Ok(edit)
    }

    fn parse_kilobytes(self, raw: &str) -> CoreResult<Option<u64>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(|kb| kb.checked_mul(BYTES_PER_KB))
            .map(Some)
            .ok_or_else(|| CoreError::InvalidInput {
                field: self.key(),
                value: raw.to_string(),
            })
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| CoreError::InvalidInput {
                field: "field",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateFilter;

    #[test]
    fn empty_date_filter_is_unset() {
        let edit = FilterField::DateFilter.parse_input("").unwrap();
        assert_eq!(edit, FilterEdit::DateFilter(None));
    }

    #[test]
    fn date_filter_option_parses() {
        let edit = FilterField::DateFilter.parse_input("custom").unwrap();
        assert_eq!(edit, FilterEdit::DateFilter(Some(DateFilter::Custom)));
    }

    #[test]
    fn unknown_date_filter_is_rejected() {
        assert!(FilterField::DateFilter.parse_input("decade").is_err());
    }

    #[test]
    fn sizes_are_entered_in_kilobytes() {
        let edit = FilterField::MinSize.parse_input("10").unwrap();
        assert_eq!(edit, FilterEdit::MinSize(Some(10 * 1024)));
    }

    #[test]
    fn empty_size_clears_the_bound() {
        let edit = FilterField::MaxSize.parse_input("  ").unwrap();
        assert_eq!(edit, FilterEdit::MaxSize(None));
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let err = FilterField::MaxSize.parse_input("big").unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput {
                field: "max_size",
                ..
            }
        ));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert!(FilterField::MinSize.parse_input("-5").is_err());
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let raw = u64::MAX.to_string();
        assert!(FilterField::MinSize.parse_input(&raw).is_err());
    }

    #[test]
    fn search_text_passes_through_untrimmed() {
        let edit = FilterField::Search.parse_input(" cat ").unwrap();
        assert_eq!(edit, FilterEdit::Search(" cat ".to_string()));
    }

    #[test]
    fn field_keys_round_trip() {
        for field in FilterField::ALL {
            assert_eq!(field.key().parse::<FilterField>().unwrap(), field);
        }
        assert!("size".parse::<FilterField>().is_err());
    }
}
