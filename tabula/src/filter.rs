//! Column filters, external filter directives and global search.

use std::cmp::Ordering;

use crate::column::Column;
use crate::value::CellValue;

/// A filter value for a single column.
///
/// Column filters combine with each other and with the global search using
/// logical AND.
///
/// # Example
///
/// ```
/// use tabula::{CellValue, FilterValue};
///
/// let status = FilterValue::exact("Pending");
/// assert!(status.matches(&CellValue::from("Pending")));
///
/// let guests = FilterValue::between(2i64, 4i64);
/// assert!(guests.matches(&CellValue::from(3i64)));
/// assert!(!guests.matches(&CellValue::from(5i64)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Case-insensitive substring of the cell text.
    Text(String),
    /// Cell equals the value (see [`CellValue::loosely_equals`]).
    Exact(CellValue),
    /// Cell equals any of the values.
    OneOf(Vec<CellValue>),
    /// Cell lies within the inclusive bounds. Missing bounds are open.
    Range {
        min: Option<CellValue>,
        max: Option<CellValue>,
    },
}

impl FilterValue {
    /// Creates a case-insensitive substring filter.
    pub fn text(value: impl Into<String>) -> Self {
        FilterValue::Text(value.into())
    }

    /// Creates an equality filter.
    pub fn exact(value: impl Into<CellValue>) -> Self {
        FilterValue::Exact(value.into())
    }

    /// Creates a filter matching any of the given values.
    pub fn one_of<V: Into<CellValue>>(values: impl IntoIterator<Item = V>) -> Self {
        FilterValue::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Creates an inclusive range filter.
    pub fn between(min: impl Into<CellValue>, max: impl Into<CellValue>) -> Self {
        FilterValue::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Creates a lower-bounded range filter.
    pub fn at_least(min: impl Into<CellValue>) -> Self {
        FilterValue::Range {
            min: Some(min.into()),
            max: None,
        }
    }

    /// Creates an upper-bounded range filter.
    pub fn at_most(max: impl Into<CellValue>) -> Self {
        FilterValue::Range {
            min: None,
            max: Some(max.into()),
        }
    }

    /// Returns `true` for values that filter nothing.
    ///
    /// Setting an empty value on a column removes its filter instead.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::Exact(v) => v.is_null(),
            FilterValue::OneOf(values) => values.is_empty(),
            FilterValue::Range { min, max } => {
                min.as_ref().is_none_or(CellValue::is_null)
                    && max.as_ref().is_none_or(CellValue::is_null)
            }
        }
    }

    /// Check whether a cell value passes this filter.
    pub fn matches(&self, cell: &CellValue) -> bool {
        match self {
            FilterValue::Text(needle) => contains_ignore_case(cell, &needle.to_lowercase()),
            FilterValue::Exact(expected) => cell.loosely_equals(expected),
            FilterValue::OneOf(values) => values.iter().any(|v| cell.loosely_equals(v)),
            FilterValue::Range { min, max } => {
                let above = match min {
                    Some(min) if !min.is_null() => {
                        matches!(cell.compare(min), Some(Ordering::Greater | Ordering::Equal))
                    }
                    _ => true,
                };
                let below = match max {
                    Some(max) if !max.is_null() => {
                        matches!(cell.compare(max), Some(Ordering::Less | Ordering::Equal))
                    }
                    _ => true,
                };
                above && below
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::text(value)
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

/// An externally imposed column filter.
///
/// A parent controller hands the table a list of directives; each one sets
/// (or, with `value: None`, clears) one column filter unconditionally,
/// overwriting whatever the user entered for that column. Directives naming
/// unknown columns are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterByCol {
    /// Target column id.
    pub column: String,
    /// New filter value, `None` to clear.
    pub value: Option<FilterValue>,
}

impl FilterByCol {
    /// Directive that sets a column filter.
    pub fn set(column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            column: column.into(),
            value: Some(value.into()),
        }
    }

    /// Directive that clears a column filter.
    pub fn clear(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: None,
        }
    }
}

fn contains_ignore_case(cell: &CellValue, needle_lower: &str) -> bool {
    if cell.is_null() {
        return false;
    }
    cell.to_search_text().contains(needle_lower)
}

/// Global search over a set of searchable columns.
///
/// A row passes when any searched column's text contains the query,
/// case-insensitively. An empty query passes every row; a non-empty query
/// with no searchable columns passes none.
pub(crate) fn matches_global<T>(row: &T, searched: &[&Column<T>], query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    searched.iter().any(|column| match column.value(row) {
        Ok(value) => contains_ignore_case(&value, query_lower),
        Err(_) => false,
    })
}
