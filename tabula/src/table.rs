//! The table component.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::column::Column;
use crate::error::CellError;
use crate::filter::{FilterByCol, FilterValue, matches_global};
use crate::labels::{EnglishLabels, Labels};
use crate::pagination::PageInfo;
use crate::selection::SelectionMode;
use crate::sort::compare_cells;
use crate::state::{Action, ColumnDomain, DEFAULT_PAGE_SIZE, ViewState, VisibilitySeed};
use crate::value::CellValue;
use crate::view::{
    Body, Cell, ColumnMenu, ColumnToggle, HeaderCell, NavButton, Navigation, RenderedRow,
    SearchBox, ViewOutput,
};

/// Derives a stable key for a row.
pub type RowKey<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Options for creating a [`Table`].
///
/// `visibility` and `column_to_filter` are seeds: they are read once when the
/// table is created and ignored afterwards.
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub title: String,
    pub search_placeholder: Option<String>,
    /// Columns considered by the global search.
    pub column_to_search: Vec<String>,
    pub page_size: usize,
    /// `None` enables pagination only when the rows overflow one page.
    /// `Some(false)` shows every filtered row on one page, not just the first
    /// `page_size` rows.
    pub pagination: Option<bool>,
    pub is_loading: bool,
    /// External filter directives, re-applied whenever the `Arc` changes.
    pub filter_by_col: Option<Arc<[FilterByCol]>>,
    pub visibility: VisibilitySeed,
    pub column_to_filter: Vec<FilterByCol>,
    pub selection_mode: SelectionMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            title: "Table".into(),
            search_placeholder: None,
            column_to_search: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            pagination: None,
            is_loading: false,
            filter_by_col: None,
            visibility: VisibilitySeed::default(),
            column_to_filter: Vec::new(),
            selection_mode: SelectionMode::default(),
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    /// Set the columns searched by the global filter.
    pub fn search_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.column_to_search = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Force pagination on or off.
    ///
    /// Off means a single page holding all filtered rows, with the
    /// navigation hidden.
    pub fn pagination(mut self, enabled: bool) -> Self {
        self.pagination = Some(enabled);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.is_loading = loading;
        self
    }

    pub fn filter_by_col(mut self, directives: Arc<[FilterByCol]>) -> Self {
        self.filter_by_col = Some(directives);
        self
    }

    /// Seed the initial column visibility.
    pub fn visibility(mut self, seed: VisibilitySeed) -> Self {
        self.visibility = seed;
        self
    }

    /// Seed an initial column filter.
    pub fn initial_filter(mut self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.column_to_filter.push(FilterByCol::set(column, value));
        self
    }

    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }
}

/// A searchable, filterable, sortable, paginated table over in-memory rows.
///
/// `Table` owns its rows, column definitions and [`ViewState`]. Interaction
/// goes through [`dispatch`](Table::dispatch); [`view`](Table::view)
/// produces the current [`ViewOutput`].
///
/// # Example
///
/// ```
/// use tabula::{Action, Column, Table, TableOptions};
///
/// let rows: Vec<String> = ["Alpha", "Beta", "Gamma"].map(String::from).to_vec();
/// let columns = vec![Column::new("name", |r: &String| r.clone())];
/// let mut table = Table::new(columns, rows, TableOptions::new().search_columns(["name"]));
///
/// table.dispatch(Action::SetGlobalFilter("al".into()));
/// assert_eq!(table.view().column_text("name"), vec!["Alpha"]);
/// ```
pub struct Table<T> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    row_key: Option<RowKey<T>>,
    title: String,
    search_placeholder: Option<String>,
    column_to_search: Vec<String>,
    pagination: Option<bool>,
    is_loading: bool,
    applied_directives: Option<Arc<[FilterByCol]>>,
    state: ViewState,
    labels: Arc<dyn Labels>,
    on_page_change: Option<Box<dyn FnMut(usize) + Send>>,
}

impl<T> Table<T> {
    /// Create a table. Initial filters, visibility and directives are applied
    /// immediately.
    pub fn new(columns: Vec<Column<T>>, rows: Vec<T>, options: TableOptions) -> Self {
        let domain = ColumnDomain::of(&columns);
        let mut state = ViewState::new(domain, &options.visibility, options.page_size)
            .with_selection_mode(options.selection_mode);
        for filter in &options.column_to_filter {
            state.apply(&Action::SetColumnFilter {
                column: filter.column.clone(),
                value: filter.value.clone(),
            });
        }

        let mut table = Self {
            columns,
            rows,
            row_key: None,
            title: options.title,
            search_placeholder: options.search_placeholder,
            column_to_search: options.column_to_search,
            pagination: options.pagination,
            is_loading: options.is_loading,
            applied_directives: None,
            state,
            labels: Arc::new(EnglishLabels),
            on_page_change: None,
        };
        if let Some(directives) = options.filter_by_col {
            table.set_filter_by_col(directives);
        }
        table
    }

    /// Use a key function for row identity instead of row position.
    pub fn with_row_key<F>(mut self, key: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.row_key = Some(Arc::new(key));
        self.state.apply(&Action::ClearSelection);
        self
    }

    /// Use a label set for control text.
    pub fn with_labels(mut self, labels: impl Labels + 'static) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    /// Share a label set with other tables.
    pub fn with_shared_labels(mut self, labels: Arc<dyn Labels>) -> Self {
        self.labels = labels;
        self
    }

    /// Register a callback invoked with the new page index whenever the
    /// current page changes.
    pub fn on_page_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether pagination is on for the current rows.
    pub fn pagination_enabled(&self) -> bool {
        self.pagination
            .unwrap_or(self.rows.len() > self.state.page_size())
    }

    /// Key of the row at a position in the row collection.
    pub fn key_of(&self, index: usize, row: &T) -> String {
        match &self.row_key {
            Some(key) => key(row),
            None => index.to_string(),
        }
    }

    /// Rows currently selected, in collection order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(i, row)| self.state.selection().is_selected(&self.key_of(*i, row)))
            .map(|(_, row)| row)
            .collect()
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Replace the rows. Resets the page and clears the selection.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        let before = self.current_page();
        self.rows = rows;
        self.state.reset_for_rows();
        self.settle(before);
    }

    /// Replace the column definitions, dropping state for vanished columns.
    pub fn set_columns(&mut self, columns: Vec<Column<T>>) {
        let before = self.current_page();
        self.state.reset_for_columns(ColumnDomain::of(&columns));
        self.columns = columns;
        self.settle(before);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Hand the table a directive list.
    ///
    /// The list is applied only when it is a different allocation from the
    /// last one applied; passing the same `Arc` again is a no-op.
    pub fn set_filter_by_col(&mut self, directives: Arc<[FilterByCol]>) {
        if let Some(applied) = &self.applied_directives
            && Arc::ptr_eq(applied, &directives)
        {
            return;
        }
        self.applied_directives = Some(Arc::clone(&directives));
        self.dispatch(Action::ApplyExternalFilters(directives));
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: Action) {
        if let Action::ToggleRowSelection(key) = &action
            && !self.has_row_key(key)
        {
            debug!("selection toggle for unknown row '{}' ignored", key);
            return;
        }
        let before = self.current_page();
        self.state.apply(&action);
        self.settle(before);
    }

    fn has_row_key(&self, key: &str) -> bool {
        self.rows
            .iter()
            .enumerate()
            .any(|(i, row)| self.key_of(i, row) == key)
    }

    fn current_page(&self) -> usize {
        self.page_info().page_index
    }

    /// Clamp the page and notify the page callback if it moved.
    fn settle(&mut self, before: usize) {
        let info = self.page_info();
        self.state.clamp_page(if info.enabled { info.page_count } else { 1 });
        let after = self.state.page_index();
        if after != before
            && let Some(callback) = self.on_page_change.as_mut()
        {
            callback(after);
        }
    }

    // -------------------------------------------------------------------------
    // Row model
    // -------------------------------------------------------------------------

    fn searched_columns(&self) -> Vec<&Column<T>> {
        self.column_to_search
            .iter()
            .filter_map(|id| {
                let column = self.column(id);
                if column.is_none() {
                    debug!("search column '{}' is not defined", id);
                }
                column
            })
            .collect()
    }

    fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id() == id)
    }

    /// Indices of the rows passing the global filter and every column filter,
    /// in sorted order.
    pub fn filtered_indices(&self) -> Vec<usize> {
        let query = self.state.global_filter().to_lowercase();
        let searched = self.searched_columns();
        let filters: Vec<(&Column<T>, &FilterValue)> = self
            .state
            .column_filters()
            .iter()
            .filter_map(|(id, value)| self.column(id).map(|c| (c, value)))
            .collect();

        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches_global(*row, &searched, &query))
            .filter(|(_, row)| {
                filters.iter().all(|(column, filter)| match column.value(row) {
                    Ok(value) => filter.matches(&value),
                    Err(_) => false,
                })
            })
            .map(|(i, _)| i)
            .collect();

        self.sort_indices(&mut indices);
        indices
    }

    fn sort_indices(&self, indices: &mut Vec<usize>) {
        let sorted: Vec<_> = self
            .state
            .sorting()
            .iter()
            .filter_map(|spec| self.column(&spec.column).map(|c| (c, spec.direction)))
            .collect();
        if sorted.is_empty() {
            return;
        }

        let mut keyed: Vec<(usize, Vec<Result<CellValue, CellError>>)> = indices
            .iter()
            .map(|&i| (i, sorted.iter().map(|(c, _)| c.value(&self.rows[i])).collect()))
            .collect();

        // Vec::sort_by is stable, ties keep filtered order.
        keyed.sort_by(|(_, a), (_, b)| {
            sorted
                .iter()
                .enumerate()
                .map(|(k, (_, direction))| compare_cells(&a[k], &b[k], *direction))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        *indices = keyed.into_iter().map(|(i, _)| i).collect();
    }

    /// Pagination info for the current state.
    pub fn page_info(&self) -> PageInfo {
        PageInfo::compute(
            self.filtered_indices().len(),
            self.state.page_size(),
            self.state.page_index(),
            self.pagination_enabled(),
        )
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        let filtered = self.filtered_indices();
        let info = self.page_info();
        filtered[info.range()].iter().map(|&i| &self.rows[i]).collect()
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Produce the render output for the current state.
    pub fn view(&self) -> ViewOutput {
        let filtered = self.filtered_indices();
        let page = PageInfo::compute(
            filtered.len(),
            self.state.page_size(),
            self.state.page_index(),
            self.pagination_enabled(),
        );

        let visible: Vec<&Column<T>> = self
            .columns
            .iter()
            .filter(|c| self.state.is_visible(c.id()))
            .collect();

        let headers = visible
            .iter()
            .map(|c| HeaderCell {
                id: c.id().to_string(),
                label: c.label().to_string(),
                sortable: c.is_sortable(),
                sort: self
                    .state
                    .sorting()
                    .iter()
                    .find(|s| s.column == c.id())
                    .map(|s| s.direction),
            })
            .collect();

        let body = if self.is_loading {
            Body::Loading {
                label: self.labels.loading(),
            }
        } else if filtered.is_empty() {
            Body::Empty {
                label: self.labels.no_results(),
                colspan: visible.len().max(1),
            }
        } else {
            Body::Rows(
                filtered[page.range()]
                    .iter()
                    .map(|&i| self.render_row(i, &visible))
                    .collect(),
            )
        };

        let column_menu = ColumnMenu {
            label: self.labels.columns(),
            toggles: self
                .columns
                .iter()
                .filter(|c| c.is_hideable())
                .map(|c| ColumnToggle {
                    id: c.id().to_string(),
                    label: c.label().to_string(),
                    visible: self.state.is_visible(c.id()),
                })
                .collect(),
        };

        ViewOutput {
            title: self.title.clone(),
            search: SearchBox {
                placeholder: self
                    .search_placeholder
                    .clone()
                    .unwrap_or_else(|| self.labels.search_placeholder()),
                value: self.state.global_filter().to_string(),
            },
            column_menu,
            headers,
            body,
            navigation: Navigation {
                visible: page.enabled,
                previous: NavButton {
                    label: self.labels.previous(),
                    enabled: page.can_previous,
                },
                next: NavButton {
                    label: self.labels.next(),
                    enabled: page.can_next,
                },
            },
            caption: self.labels.showing(page.page_rows, page.total_rows),
            page,
        }
    }

    fn render_row(&self, index: usize, visible: &[&Column<T>]) -> RenderedRow {
        let row = &self.rows[index];
        let key = self.key_of(index, row);
        RenderedRow {
            selected: self.state.selection().is_selected(&key),
            key,
            cells: visible
                .iter()
                .map(|c| match c.display(row) {
                    Some(text) => Cell::Text(text),
                    None => Cell::Empty,
                })
                .collect(),
        }
    }
}

impl<T> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("state", &self.state)
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

/// One-shot render of rows with fresh view state.
pub fn render<T>(rows: Vec<T>, columns: Vec<Column<T>>, options: TableOptions) -> ViewOutput {
    Table::new(columns, rows, options).view()
}
