//! User-facing strings.
//!
//! The table never translates anything itself; it asks a [`Labels`]
//! implementation for already-resolved text.

/// Resolved strings shown by the table controls.
pub trait Labels: Send + Sync {
    /// Placeholder for the search box when the caller sets none.
    fn search_placeholder(&self) -> String;

    /// Label of the column-visibility menu.
    fn columns(&self) -> String;

    /// Previous page button.
    fn previous(&self) -> String;

    /// Next page button.
    fn next(&self) -> String;

    /// Placeholder row when nothing matches.
    fn no_results(&self) -> String;

    /// Placeholder while rows are loading.
    fn loading(&self) -> String;

    /// Row count caption.
    fn showing(&self, page_rows: usize, total_rows: usize) -> String {
        format!(
            "Showing {} of {} rows.",
            group_thousands(page_rows),
            group_thousands(total_rows)
        )
    }
}

/// Built-in English labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn search_placeholder(&self) -> String {
        "Search".into()
    }

    fn columns(&self) -> String {
        "Columns".into()
    }

    fn previous(&self) -> String {
        "Previous".into()
    }

    fn next(&self) -> String {
        "Next".into()
    }

    fn no_results(&self) -> String {
        "No results.".into()
    }

    fn loading(&self) -> String {
        "Loading...".into()
    }
}

/// Format a count with comma thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
