//! Plain-text rendering of filter state and file listings.

use dedupe_core::{format_size, FileFilters, StoredFile};

const DATE_KEYS: [&str; 3] = ["date_filter", "start_date", "end_date"];

/// Describes the active filters on one line.
pub fn filters_line(filters: &FileFilters) -> String {
    if filters.is_empty() {
        return "filters: none".to_string();
    }

    let mut parts: Vec<String> = filters
        .query_pairs()
        .into_iter()
        .filter(|(key, _)| !DATE_KEYS.contains(key))
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    if let Some(category) = filters.file_type_category() {
        parts.push(format!("({})", category.label()));
    }
    if let Some(date) = filters.date_filter {
        let mut uploaded = format!("uploaded: {}", date.label());
        if filters.has_custom_range() {
            let bound = |b: &Option<String>| {
                b.as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("*")
                    .to_string()
            };
            uploaded.push_str(&format!(
                " {}..{}",
                bound(&filters.start_date),
                bound(&filters.end_date)
            ));
        }
        parts.push(uploaded);
    }
    format!("filters: {}", parts.join(" "))
}

/// One line per file, newest first as returned by the service.
pub fn file_list(files: &[StoredFile]) -> String {
    if files.is_empty() {
        return "no files match".to_string();
    }

    let name_width = files
        .iter()
        .map(|f| f.original_filename.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{} file(s)\n", files.len());
    for file in files {
        let marker = match file.duplicate_of {
            _ if file.is_original() => String::new(),
            Some(original) => format!("  duplicate of {original}"),
            None => "  duplicate".to_string(),
        };
        out.push_str(&format!(
            "  {:<name_width$}  {:>10}  {}{marker}\n",
            file.original_filename,
            format_size(file.size),
            file.file_type,
        ));
    }
    out
}
