//! Render output of a table.
//!
//! A [`ViewOutput`] is a plain data description of everything the table
//! shows; [`render_text`](crate::render::render_text) turns it into text and
//! other front-ends can walk it directly.

use crate::pagination::PageInfo;
use crate::sort::Direction;

/// Complete description of one rendered table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOutput {
    pub title: String,
    pub search: SearchBox,
    pub column_menu: ColumnMenu,
    /// Headers of the visible columns, in column order.
    pub headers: Vec<HeaderCell>,
    pub body: Body,
    pub navigation: Navigation,
    pub page: PageInfo,
    /// Row count caption, e.g. "Showing 20 of 45 rows."
    pub caption: String,
}

impl ViewOutput {
    /// Rendered rows, empty for the loading and no-results bodies.
    pub fn rows(&self) -> &[RenderedRow] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Loading { .. } | Body::Empty { .. } => &[],
        }
    }

    /// Text of one column for every rendered row (empty string for absent cells).
    pub fn column_text(&self, column: &str) -> Vec<String> {
        let Some(index) = self.headers.iter().position(|h| h.id == column) else {
            return Vec::new();
        };
        self.rows()
            .iter()
            .map(|row| row.cells.get(index).map(Cell::text).unwrap_or_default().to_string())
            .collect()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, Body::Loading { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, Body::Empty { .. })
    }
}

/// The free-text search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub placeholder: String,
    pub value: String,
}

/// The column-visibility menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMenu {
    pub label: String,
    /// One toggle per hideable column.
    pub toggles: Vec<ColumnToggle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnToggle {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub sortable: bool,
    /// Current sort direction, if this column is sorted.
    pub sort: Option<Direction>,
}

/// Table body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Rows are loading; a placeholder replaces the rows.
    Loading { label: String },
    /// Nothing matched; a single placeholder row spans `colspan` columns.
    Empty { label: String, colspan: usize },
    /// Rows of the current page.
    Rows(Vec<RenderedRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub key: String,
    pub selected: bool,
    /// One cell per visible column.
    pub cells: Vec<Cell>,
}

/// A rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// The value was missing or could not be read.
    Empty,
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) => s,
            Cell::Empty => "",
        }
    }
}

/// Previous/next controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Hidden when pagination is off.
    pub visible: bool,
    pub previous: NavButton,
    pub next: NavButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub label: String,
    pub enabled: bool,
}
