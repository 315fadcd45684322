//! Encoding of a filter state as service query parameters.

use url::form_urlencoded;

use crate::filters::form::FilterField;
use crate::model::{DateFilter, FileFilters};

impl FileFilters {
    /// The non-empty constraints as `(key, value)` pairs, in form order.
    ///
    /// Blank strings and unset fields are left out. The custom range bounds
    /// are only included while the date filter is [`DateFilter::Custom`].
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push_text = |field: FilterField, value: &Option<String>| {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((field.key(), v.to_string()));
            }
        };

        push_text(FilterField::Search, &self.search);
        push_text(FilterField::FileType, &self.file_type);

        if let Some(min) = self.min_size {
            pairs.push((FilterField::MinSize.key(), min.to_string()));
        }
        if let Some(max) = self.max_size {
            pairs.push((FilterField::MaxSize.key(), max.to_string()));
        }

        if let Some(date) = self.date_filter {
            pairs.push((FilterField::DateFilter.key(), date.as_str().to_string()));
            if date == DateFilter::Custom {
                for (field, value) in [
                    (FilterField::StartDate, &self.start_date),
                    (FilterField::EndDate, &self.end_date),
                ] {
                    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                        pairs.push((field.key(), v.to_string()));
                    }
                }
            }
        }

        pairs
    }

    /// URL-encoded form of [`FileFilters::query_pairs`], without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterEdit;

    #[test]
    fn empty_filters_encode_to_nothing() {
        assert!(FileFilters::default().query_pairs().is_empty());
        assert_eq!(FileFilters::default().to_query_string(), "");
    }

    #[test]
    fn blank_text_fields_are_omitted() {
        let filters = FileFilters::default()
            .apply(FilterEdit::Search(String::new()))
            .apply(FilterEdit::FileType("image/".to_string()));

        assert_eq!(filters.query_pairs(), vec![("file_type", "image/".to_string())]);
    }

    #[test]
    fn sizes_are_sent_in_bytes() {
        let filters = FileFilters::default()
            .apply(FilterEdit::MinSize(Some(1024)))
            .apply(FilterEdit::MaxSize(Some(4096)));

        assert_eq!(filters.to_query_string(), "min_size=1024&max_size=4096");
    }

    #[test]
    fn range_bounds_only_with_custom_filter() {
        let base = FileFilters::default()
            .apply(FilterEdit::StartDate("2024-01-01".to_string()))
            .apply(FilterEdit::EndDate("2024-02-01".to_string()));

        let week = base.apply(FilterEdit::DateFilter(Some(DateFilter::Week)));
        assert_eq!(week.to_query_string(), "date_filter=week");

        let custom = base.apply(FilterEdit::DateFilter(Some(DateFilter::Custom)));
        assert_eq!(
            custom.to_query_string(),
            "date_filter=custom&start_date=2024-01-01&end_date=2024-02-01"
        );
    }

    #[test]
    fn search_text_is_url_encoded() {
        let filters = FileFilters::default().apply(FilterEdit::Search("a b&c".to_string()));
        assert_eq!(filters.to_query_string(), "search=a+b%26c");
    }
}
