//! Column definitions.

use std::fmt;
use std::sync::Arc;

use crate::error::CellError;
use crate::value::CellValue;

/// Reads (or derives) a cell value from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> Result<CellValue, CellError> + Send + Sync>;

/// Turns a row and its cell value into display text.
pub type CellRenderer<T> = Arc<dyn Fn(&T, &CellValue) -> String + Send + Sync>;

/// A table column definition.
///
/// Columns are supplied by the caller and describe how to read a value from
/// a row, what to show in the header, and optionally how to render the cell.
///
/// # Example
///
/// ```
/// use tabula::Column;
///
/// struct Guest {
///     name: String,
///     nights: u32,
/// }
///
/// let columns: Vec<Column<Guest>> = vec![
///     Column::new("name", |g: &Guest| g.name.clone()).header("Guest"),
///     Column::new("nights", |g: &Guest| g.nights)
///         .header("Nights")
///         .render_with(|_, v| format!("{v} night(s)")),
/// ];
/// assert_eq!(columns[0].label(), "Guest");
/// ```
pub struct Column<T> {
    id: String,
    header: Option<String>,
    accessor: Accessor<T>,
    renderer: Option<CellRenderer<T>>,
    sortable: bool,
    hideable: bool,
}

impl<T> Column<T> {
    /// Create a column with an infallible accessor.
    pub fn new<F, V>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
        V: Into<CellValue>,
    {
        Self::try_new(id, move |row| Ok(accessor(row).into()))
    }

    /// Create a column whose accessor may fail for some rows.
    ///
    /// Failed cells render empty instead of aborting the render.
    pub fn try_new<F>(id: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<CellValue, CellError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: None,
            accessor: Arc::new(accessor),
            renderer: None,
            sortable: true,
            hideable: true,
        }
    }

    /// Set the header label. Defaults to the column id.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set a custom cell renderer.
    pub fn render_with<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&T, &CellValue) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Exclude this column from sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Keep this column out of the visibility menu; it is always shown.
    pub fn always_visible(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// The stable column identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Header label, falling back to the id.
    pub fn label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_hideable(&self) -> bool {
        self.hideable
    }

    /// Read this column's value from a row.
    pub fn value(&self, row: &T) -> Result<CellValue, CellError> {
        (self.accessor)(row)
    }

    /// Display text for a row, or `None` when the cell is absent.
    ///
    /// Null values without a custom renderer are absent as well.
    pub fn display(&self, row: &T) -> Option<String> {
        match self.value(row) {
            Ok(value) => match &self.renderer {
                Some(render) => Some(render(row, &value)),
                None if value.is_null() => None,
                None => Some(value.to_string()),
            },
            Err(err) => {
                log::trace!("cell '{}' unavailable: {}", self.id, err);
                None
            }
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: Arc::clone(&self.accessor),
            renderer: self.renderer.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("custom_renderer", &self.renderer.is_some())
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: Option<String>,
    }

    #[test]
    fn test_display_falls_back_to_empty() {
        let col = Column::new("name", |r: &Row| r.name.clone());
        assert_eq!(col.display(&Row { name: Some("Ada".into()) }), Some("Ada".into()));
        assert_eq!(col.display(&Row { name: None }), None);
    }

    #[test]
    fn test_failed_accessor_is_absent() {
        let col: Column<Row> = Column::try_new("broken", |_| Err(CellError::missing("broken")));
        assert_eq!(col.display(&Row { name: None }), None);
    }

    #[test]
    fn test_renderer_sees_value() {
        let col = Column::new("name", |r: &Row| r.name.clone())
            .render_with(|_, v| format!("<{v}>"));
        assert_eq!(col.display(&Row { name: Some("x".into()) }), Some("<x>".into()));
        assert_eq!(col.label(), "name");
    }
}
