//! Page arithmetic.

use std::ops::Range;

/// Pagination information for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (0-based).
    pub page_index: usize,
    /// Number of pages; 0 when there are no filtered rows.
    pub page_count: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows on the current page.
    pub page_rows: usize,
    /// Rows after filtering, across all pages.
    pub total_rows: usize,
    /// Whether the previous button is enabled.
    pub can_previous: bool,
    /// Whether the next button is enabled.
    pub can_next: bool,
    /// Whether pagination is on (navigation controls shown).
    pub enabled: bool,
}

impl PageInfo {
    /// Compute page info for a filtered row count.
    ///
    /// When pagination is disabled every row is on a single page.
    pub fn compute(total_rows: usize, page_size: usize, page_index: usize, enabled: bool) -> Self {
        let page_size = page_size.max(1);
        let (page_count, page_index) = if enabled {
            let count = total_rows.div_ceil(page_size);
            (count, page_index.min(count.saturating_sub(1)))
        } else {
            (usize::from(total_rows > 0), 0)
        };
        let range = Self::range_for(total_rows, page_size, page_index, enabled);

        Self {
            page_index,
            page_count,
            page_size,
            page_rows: range.len(),
            total_rows,
            can_previous: enabled && page_index > 0,
            can_next: enabled && page_index + 1 < page_count,
            enabled,
        }
    }

    /// Positions of the current page within the filtered rows.
    pub fn range(&self) -> Range<usize> {
        Self::range_for(self.total_rows, self.page_size, self.page_index, self.enabled)
    }

    fn range_for(total_rows: usize, page_size: usize, page_index: usize, enabled: bool) -> Range<usize> {
        if !enabled {
            return 0..total_rows;
        }
        let start = page_index.saturating_mul(page_size).min(total_rows);
        let end = start.saturating_add(page_size).min(total_rows);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_five_rows() {
        let sizes: Vec<usize> = (0..3)
            .map(|page| PageInfo::compute(45, 20, page, true).page_rows)
            .collect();
        assert_eq!(sizes, vec![20, 20, 5]);

        let first = PageInfo::compute(45, 20, 0, true);
        assert_eq!(first.page_count, 3);
        assert!(!first.can_previous);
        assert!(first.can_next);

        let last = PageInfo::compute(45, 20, 2, true);
        assert!(last.can_previous);
        assert!(!last.can_next);
        assert_eq!(last.range(), 40..45);
    }

    #[test]
    fn test_index_clamped() {
        let info = PageInfo::compute(45, 20, 9, true);
        assert_eq!(info.page_index, 2);
    }

    #[test]
    fn test_empty() {
        let info = PageInfo::compute(0, 20, 0, true);
        assert_eq!(info.page_count, 0);
        assert!(!info.can_previous && !info.can_next);
        assert_eq!(info.page_rows, 0);
    }

    #[test]
    fn test_disabled_is_single_page() {
        let info = PageInfo::compute(45, 20, 1, false);
        assert_eq!(info.page_count, 1);
        assert_eq!(info.page_index, 0);
        assert_eq!(info.page_rows, 45);
        assert!(!info.can_next);
    }
}
