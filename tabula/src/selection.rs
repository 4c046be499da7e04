//! Row selection.

use std::collections::HashSet;
use std::hash::Hash;

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// Single row selection (radio-button style).
    Single,
    /// Multiple rows can be selected (checkbox style).
    #[default]
    Multi,
}

/// Tracks selected rows by their keys.
///
/// Selection is exposed state only; it does not affect filtering, sorting or
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Clone + Eq + Hash> {
    pub mode: SelectionMode,
    pub selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::with_mode(SelectionMode::default())
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection in the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        let selected = !self.selected.contains(&key);
        self.set(key, selected)
    }

    /// Select or deselect a key. Returns true if selection changed.
    pub fn set(&mut self, key: K, selected: bool) -> bool {
        match (self.mode, selected) {
            (SelectionMode::None, _) => false,
            (_, false) => self.selected.remove(&key),
            (SelectionMode::Single, true) => {
                if self.selected.len() == 1 && self.selected.contains(&key) {
                    return false;
                }
                self.selected.clear();
                self.selected.insert(key)
            }
            (SelectionMode::Multi, true) => self.selected.insert(key),
        }
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Clear all selections. Returns true if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_replaces() {
        let mut sel = Selection::with_mode(SelectionMode::Single);
        assert!(sel.toggle("a"));
        assert!(sel.toggle("b"));
        assert!(!sel.is_selected(&"a"));
        assert!(sel.is_selected(&"b"));
        assert!(sel.toggle("b"));
        assert!(sel.is_empty());
    }

    #[test]
    fn test_multi_mode_accumulates() {
        let mut sel = Selection::default();
        sel.toggle(1);
        sel.toggle(2);
        assert_eq!(sel.len(), 2);
        assert!(!sel.set(2, true));
        assert!(sel.clear());
        assert!(!sel.clear());
    }

    #[test]
    fn test_none_mode_ignores() {
        let mut sel = Selection::with_mode(SelectionMode::None);
        assert!(!sel.toggle(1));
        assert!(sel.is_empty());
    }
}
