//! Single-field edits of a [`FileFilters`] value.

use crate::model::{DateFilter, FileFilters};

/// A change to exactly one filter field.
///
/// Each variant names its field, so an edit can never target a key that
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    Search(String),
    FileType(String),
    MinSize(Option<u64>),
    MaxSize(Option<u64>),
    /// `None` clears the date constraint entirely.
    DateFilter(Option<DateFilter>),
    StartDate(String),
    EndDate(String),
}

impl FileFilters {
    /// Returns a new filter state with `edit` applied.
    ///
    /// The receiver is left untouched; every other field carries over.
    #[must_use]
    pub fn apply(&self, edit: FilterEdit) -> FileFilters {
        let mut next = self.clone();
        match edit {
            FilterEdit::Search(v) => next.search = Some(v),
            FilterEdit::FileType(v) => next.file_type = Some(v),
            FilterEdit::MinSize(v) => next.min_size = v,
            FilterEdit::MaxSize(v) => next.max_size = v,
            FilterEdit::DateFilter(v) => next.date_filter = v,
            FilterEdit::StartDate(v) => next.start_date = Some(v),
            FilterEdit::EndDate(v) => next.end_date = Some(v),
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_does_not_mutate_original() {
        let original = FileFilters::default();
        let next = original.apply(FilterEdit::Search("cat".to_string()));

        assert_eq!(original, FileFilters::default());
        assert_eq!(next.search.as_deref(), Some("cat"));
    }

    #[test]
    fn apply_retains_other_fields() {
        let state = FileFilters::default()
            .apply(FilterEdit::Search("a".to_string()))
            .apply(FilterEdit::MinSize(Some(1024)))
            .apply(FilterEdit::FileType("text/".to_string()));

        assert_eq!(state.search.as_deref(), Some("a"));
        assert_eq!(state.min_size, Some(1024));
        assert_eq!(state.file_type.as_deref(), Some("text/"));
        assert!(state.max_size.is_none());
    }

    #[test]
    fn last_write_wins_per_field() {
        let state = FileFilters::default()
            .apply(FilterEdit::Search("a".to_string()))
            .apply(FilterEdit::Search("ab".to_string()));

        assert_eq!(state.search.as_deref(), Some("ab"));
    }

    #[test]
    fn clearing_date_filter_keeps_range_bounds() {
        let state = FileFilters::default()
            .apply(FilterEdit::DateFilter(Some(DateFilter::Custom)))
            .apply(FilterEdit::StartDate("2024-01-01".to_string()))
            .apply(FilterEdit::DateFilter(None));

        assert!(state.date_filter.is_none());
        assert_eq!(state.start_date.as_deref(), Some("2024-01-01"));
        assert!(!state.has_custom_range());
    }

    #[test]
    fn size_can_be_cleared() {
        let state = FileFilters::default()
            .apply(FilterEdit::MaxSize(Some(2048)))
            .apply(FilterEdit::MaxSize(None));

        assert!(state.max_size.is_none());
    }
}
