//! View state and its reducer.
//!
//! All interaction with a table goes through [`Action`]s applied by
//! [`ViewState::reduce`]. The reducer is pure: it only touches the state it is
//! given and knows nothing about rows. Page clamping, which depends on the
//! filtered row count, is done by the owning [`Table`](crate::Table) after
//! each dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::column::Column;
use crate::filter::{FilterByCol, FilterValue};
use crate::selection::{Selection, SelectionMode};
use crate::sort::{SortSpec, next_direction};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// A user or controller interaction with the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the global search string.
    SetGlobalFilter(String),
    /// Set (or with `None`, clear) one column filter.
    SetColumnFilter {
        column: String,
        value: Option<FilterValue>,
    },
    /// Remove every column filter.
    ResetColumnFilters,
    /// Replace the whole sort state.
    SetSort(Vec<SortSpec>),
    /// Header click: unsorted -> asc -> desc -> unsorted.
    ///
    /// With `multi` the column is added to the existing sort state instead of
    /// replacing it.
    ToggleSort { column: String, multi: bool },
    /// Jump to a page (0-based).
    SetPage(usize),
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PreviousPage,
    /// Change the page size. Zero is treated as one.
    SetPageSize(usize),
    /// Show, hide (`Some`) or flip (`None`) a column.
    ToggleVisibility {
        column: String,
        visible: Option<bool>,
    },
    /// Apply a list of external filter directives in order.
    ApplyExternalFilters(Arc<[FilterByCol]>),
    /// Flip selection of a row by key.
    ToggleRowSelection(String),
    /// Deselect every row.
    ClearSelection,
}

/// The ids and capabilities of the columns a state may reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDomain {
    entries: Vec<ColumnKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnKey {
    id: String,
    sortable: bool,
    hideable: bool,
}

impl ColumnDomain {
    /// Build the domain for a column set.
    pub fn of<T>(columns: &[Column<T>]) -> Self {
        let mut entries: Vec<ColumnKey> = Vec::with_capacity(columns.len());
        for col in columns {
            if entries.iter().any(|e| e.id == col.id()) {
                debug!("duplicate column id '{}' ignored", col.id());
                continue;
            }
            entries.push(ColumnKey {
                id: col.id().to_string(),
                sortable: col.is_sortable(),
                hideable: col.is_hideable(),
            });
        }
        Self { entries }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn get(&self, id: &str) -> Option<&ColumnKey> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn is_sortable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.sortable)
    }

    fn is_hideable(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.hideable)
    }

    /// Column ids in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}

/// Initial column visibility.
///
/// A seed is read once when the table is created. Changing the caller's copy
/// afterwards has no effect; use [`Action::ToggleVisibility`] on the live
/// table instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilitySeed(BTreeMap<String, bool>);

impl VisibilitySeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a column hidden.
    pub fn hide(mut self, column: impl Into<String>) -> Self {
        self.0.insert(column.into(), false);
        self
    }

    /// Start with a column shown.
    pub fn show(mut self, column: impl Into<String>) -> Self {
        self.0.insert(column.into(), true);
        self
    }

    fn get(&self, column: &str) -> Option<bool> {
        self.0.get(column).copied()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for VisibilitySeed {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Column visibility with exactly one entry per known column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnVisibility {
    entries: Vec<(String, bool)>,
}

impl ColumnVisibility {
    fn seeded(domain: &ColumnDomain, seed: &VisibilitySeed) -> Self {
        let entries = domain
            .entries
            .iter()
            .map(|e| {
                let visible = !e.hideable || seed.get(&e.id).unwrap_or(true);
                (e.id.clone(), visible)
            })
            .collect();
        Self { entries }
    }

    /// Re-key for a new column domain, keeping known entries.
    fn rekey(&self, domain: &ColumnDomain) -> Self {
        let entries = domain
            .entries
            .iter()
            .map(|e| {
                let visible = !e.hideable || self.is_visible(&e.id).unwrap_or(true);
                (e.id.clone(), visible)
            })
            .collect();
        Self { entries }
    }

    /// Visibility of a column, `None` if the column is unknown.
    pub fn is_visible(&self, column: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(id, _)| id == column)
            .map(|(_, visible)| *visible)
    }

    fn set(&mut self, column: &str, visible: bool) -> bool {
        match self.entries.iter_mut().find(|(id, _)| id == column) {
            Some((_, current)) if *current != visible => {
                *current = visible;
                true
            }
            _ => false,
        }
    }

    /// `(column id, visible)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(id, v)| (id.as_str(), *v))
    }
}

/// State owned by one table.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    domain: ColumnDomain,
    sorting: Vec<SortSpec>,
    column_filters: BTreeMap<String, FilterValue>,
    visibility: ColumnVisibility,
    selection: Selection<String>,
    global_filter: String,
    page_index: usize,
    page_size: usize,
}

impl ViewState {
    /// Fresh state for a column domain.
    pub fn new(domain: ColumnDomain, seed: &VisibilitySeed, page_size: usize) -> Self {
        let visibility = ColumnVisibility::seeded(&domain, seed);
        Self {
            domain,
            sorting: Vec::new(),
            column_filters: BTreeMap::new(),
            visibility,
            selection: Selection::default(),
            global_filter: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Set the selection mode, clearing any selection.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection = Selection::with_mode(mode);
        self
    }

    pub fn sorting(&self) -> &[SortSpec] {
        &self.sorting
    }

    pub fn column_filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.column_filters
    }

    pub fn column_filter(&self, column: &str) -> Option<&FilterValue> {
        self.column_filters.get(column)
    }

    pub fn visibility(&self) -> &ColumnVisibility {
        &self.visibility
    }

    pub fn is_visible(&self, column: &str) -> bool {
        self.visibility.is_visible(column).unwrap_or(false)
    }

    pub fn selection(&self) -> &Selection<String> {
        &self.selection
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn domain(&self) -> &ColumnDomain {
        &self.domain
    }

    /// Apply an action and return the new state.
    pub fn reduce(mut self, action: &Action) -> Self {
        self.apply(action);
        self
    }

    /// Apply an action in place. Returns true if the state changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::SetGlobalFilter(query) => {
                if self.global_filter == *query {
                    return false;
                }
                self.global_filter = query.clone();
                self.page_index = 0;
                true
            }
            Action::SetColumnFilter { column, value } => {
                let changed = self.set_column_filter(column, value.as_ref());
                if changed {
                    self.page_index = 0;
                }
                changed
            }
            Action::ResetColumnFilters => {
                if self.column_filters.is_empty() {
                    return false;
                }
                self.column_filters.clear();
                self.page_index = 0;
                true
            }
            Action::SetSort(specs) => {
                let mut sorting: Vec<SortSpec> = Vec::with_capacity(specs.len());
                for spec in specs {
                    if !self.domain.is_sortable(&spec.column) {
                        debug!("sort on unknown or unsortable column '{}' ignored", spec.column);
                        continue;
                    }
                    if sorting.iter().all(|s| s.column != spec.column) {
                        sorting.push(spec.clone());
                    }
                }
                self.replace_sorting(sorting)
            }
            Action::ToggleSort { column, multi } => {
                if !self.domain.is_sortable(column) {
                    debug!("toggle sort on unknown or unsortable column '{}' ignored", column);
                    return false;
                }
                let position = self.sorting.iter().position(|s| s.column == *column);
                let next = next_direction(position.map(|i| self.sorting[i].direction));

                let mut sorting = if *multi { self.sorting.clone() } else { Vec::new() };
                match (next, position.filter(|_| *multi)) {
                    (Some(direction), Some(i)) => sorting[i].direction = direction,
                    (Some(direction), None) => sorting.push(SortSpec {
                        column: column.clone(),
                        direction,
                    }),
                    (None, Some(i)) => {
                        sorting.remove(i);
                    }
                    (None, None) => {}
                }
                self.replace_sorting(sorting)
            }
            Action::SetPage(index) => self.set_page(*index),
            Action::NextPage => self.set_page(self.page_index.saturating_add(1)),
            Action::PreviousPage => self.set_page(self.page_index.saturating_sub(1)),
            Action::SetPageSize(size) => {
                let size = (*size).max(1);
                if self.page_size == size {
                    return false;
                }
                self.page_size = size;
                self.page_index = 0;
                true
            }
            Action::ToggleVisibility { column, visible } => {
                if !self.domain.is_hideable(column) {
                    debug!("visibility toggle on unknown or fixed column '{}' ignored", column);
                    return false;
                }
                let target = match visible {
                    Some(v) => *v,
                    None => !self.is_visible(column),
                };
                self.visibility.set(column, target)
            }
            Action::ApplyExternalFilters(directives) => {
                let mut changed = false;
                for directive in directives.iter() {
                    changed |= self.set_column_filter(&directive.column, directive.value.as_ref());
                }
                if changed {
                    self.page_index = 0;
                }
                changed
            }
            Action::ToggleRowSelection(key) => self.selection.toggle(key.clone()),
            Action::ClearSelection => self.selection.clear(),
        }
    }

    fn set_column_filter(&mut self, column: &str, value: Option<&FilterValue>) -> bool {
        if !self.domain.contains(column) {
            debug!("filter on unknown column '{}' ignored", column);
            return false;
        }
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                if self.column_filters.get(column) == Some(value) {
                    return false;
                }
                self.column_filters.insert(column.to_string(), value.clone());
                true
            }
            None => self.column_filters.remove(column).is_some(),
        }
    }

    fn replace_sorting(&mut self, sorting: Vec<SortSpec>) -> bool {
        if self.sorting == sorting {
            return false;
        }
        self.sorting = sorting;
        self.page_index = 0;
        true
    }

    fn set_page(&mut self, index: usize) -> bool {
        if self.page_index == index {
            return false;
        }
        self.page_index = index;
        true
    }

    /// Clamp the page index for a filtered row count.
    pub(crate) fn clamp_page(&mut self, page_count: usize) {
        self.page_index = self.page_index.min(page_count.saturating_sub(1));
    }

    /// Reset after the row collection was replaced.
    pub(crate) fn reset_for_rows(&mut self) {
        self.page_index = 0;
        self.selection.clear();
    }

    /// Re-key for new column definitions, dropping state for vanished columns.
    pub(crate) fn reset_for_columns(&mut self, domain: ColumnDomain) {
        self.visibility = self.visibility.rekey(&domain);
        self.column_filters.retain(|id, _| domain.contains(id));
        self.sorting.retain(|s| domain.is_sortable(&s.column));
        self.domain = domain;
        self.page_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Direction;

    fn state() -> ViewState {
        let columns: Vec<Column<()>> = vec![
            Column::new("name", |_| "x"),
            Column::new("status", |_| "y"),
            Column::new("actions", |_| "").unsortable().always_visible(),
        ];
        ViewState::new(
            ColumnDomain::of(&columns),
            &VisibilitySeed::new().hide("status").hide("actions").hide("ghost"),
            20,
        )
    }

    #[test]
    fn test_seed_applies_to_known_hideable_columns() {
        let s = state();
        assert!(s.is_visible("name"));
        assert!(!s.is_visible("status"));
        assert!(s.is_visible("actions"));
        assert_eq!(s.visibility().iter().count(), 3);
        assert_eq!(s.visibility().is_visible("ghost"), None);
    }

    #[test]
    fn test_toggle_sort_cycles() {
        let toggle = Action::ToggleSort {
            column: "name".into(),
            multi: false,
        };
        let s = state().reduce(&toggle);
        assert_eq!(s.sorting(), &[SortSpec::asc("name")]);
        let s = s.reduce(&toggle);
        assert_eq!(s.sorting(), &[SortSpec::desc("name")]);
        let s = s.reduce(&toggle);
        assert!(s.sorting().is_empty());
    }

    #[test]
    fn test_multi_sort_appends() {
        let s = state()
            .reduce(&Action::SetSort(vec![SortSpec::asc("name")]))
            .reduce(&Action::ToggleSort {
                column: "status".into(),
                multi: true,
            });
        assert_eq!(s.sorting(), &[SortSpec::asc("name"), SortSpec::asc("status")]);

        let s = s.reduce(&Action::ToggleSort {
            column: "name".into(),
            multi: true,
        });
        assert_eq!(s.sorting()[0].direction, Direction::Desc);
        assert_eq!(s.sorting().len(), 2);
    }

    #[test]
    fn test_unknown_and_unsortable_columns_are_noops() {
        let before = state();
        let after = before
            .clone()
            .reduce(&Action::SetSort(vec![SortSpec::asc("ghost"), SortSpec::asc("actions")]))
            .reduce(&Action::SetColumnFilter {
                column: "ghost".into(),
                value: Some(FilterValue::text("x")),
            })
            .reduce(&Action::ToggleVisibility {
                column: "actions".into(),
                visible: Some(false),
            });
        assert_eq!(before, after);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut s = state();
        s.apply(&Action::SetPage(3));
        assert_eq!(s.page_index(), 3);
        s.apply(&Action::SetColumnFilter {
            column: "name".into(),
            value: Some(FilterValue::text("a")),
        });
        assert_eq!(s.page_index(), 0);

        s.apply(&Action::SetPage(2));
        assert!(!s.apply(&Action::SetColumnFilter {
            column: "name".into(),
            value: Some(FilterValue::text("a")),
        }));
        assert_eq!(s.page_index(), 2);
    }

    #[test]
    fn test_empty_filter_value_clears() {
        let s = state()
            .reduce(&Action::SetColumnFilter {
                column: "name".into(),
                value: Some(FilterValue::text("a")),
            })
            .reduce(&Action::SetColumnFilter {
                column: "name".into(),
                value: Some(FilterValue::text("")),
            });
        assert!(s.column_filters().is_empty());
    }

    #[test]
    fn test_external_filters_last_wins() {
        let directives: Arc<[FilterByCol]> = Arc::from(vec![
            FilterByCol::set("status", "Pending"),
            FilterByCol::set("ghost", "x"),
            FilterByCol::set("status", "Booked"),
        ]);
        let s = state().reduce(&Action::ApplyExternalFilters(directives.clone()));
        assert_eq!(s.column_filter("status"), Some(&FilterValue::text("Booked")));
        assert_eq!(s.column_filters().len(), 1);

        let again = s.clone().reduce(&Action::ApplyExternalFilters(directives));
        assert_eq!(s, again);
    }

    #[test]
    fn test_page_size_zero_is_one() {
        let s = state().reduce(&Action::SetPageSize(0));
        assert_eq!(s.page_size(), 1);
    }

    #[test]
    fn test_reset_for_columns_prunes() {
        let mut s = state()
            .reduce(&Action::SetSort(vec![SortSpec::asc("status")]))
            .reduce(&Action::SetColumnFilter {
                column: "status".into(),
                value: Some(FilterValue::text("p")),
            });
        let columns: Vec<Column<()>> = vec![Column::new("name", |_| "x"), Column::new("notes", |_| "")];
        s.reset_for_columns(ColumnDomain::of(&columns));

        assert!(s.sorting().is_empty());
        assert!(s.column_filters().is_empty());
        assert!(s.is_visible("notes"));
        assert_eq!(s.visibility().is_visible("status"), None);
    }
}
