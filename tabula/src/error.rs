//! Cell read errors.

/// Error returned by a column accessor that cannot produce a value for a row.
///
/// The table never propagates these: a failed cell renders empty, fails every
/// non-empty filter, and sorts with the nulls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CellError {
    /// The row has no value for the requested field.
    #[error("field '{field}' is missing")]
    Missing { field: String },

    /// Any other accessor failure.
    #[error("{0}")]
    Invalid(String),
}

impl CellError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates an error from a free-form message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
