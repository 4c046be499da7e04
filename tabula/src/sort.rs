//! Sort state.

use std::cmp::Ordering;

use crate::error::CellError;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Header indicator for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Asc => "^",
            Direction::Desc => "v",
        }
    }
}

/// One entry of the sort state: a column and its direction.
///
/// The sort state is an ordered list of these; earlier entries take
/// precedence, later entries break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: Direction,
}

impl SortSpec {
    /// Ascending order on a column.
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Asc,
        }
    }

    /// Descending order on a column.
    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Direction::Desc,
        }
    }
}

/// Next direction when a header is toggled: unsorted -> asc -> desc -> unsorted.
pub(crate) fn next_direction(current: Option<Direction>) -> Option<Direction> {
    match current {
        None => Some(Direction::Asc),
        Some(Direction::Asc) => Some(Direction::Desc),
        Some(Direction::Desc) => None,
    }
}

/// Compare two cells for sorting.
///
/// Null and failed cells go last whatever the direction.
pub(crate) fn compare_cells(
    a: &Result<CellValue, CellError>,
    b: &Result<CellValue, CellError>,
    direction: Direction,
) -> Ordering {
    let a = a.as_ref().ok().filter(|v| !v.is_null());
    let b = b.as_ref().ok().filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => match direction {
            Direction::Asc => a.sort_cmp(b),
            Direction::Desc => b.sort_cmp(a),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycle() {
        assert_eq!(next_direction(None), Some(Direction::Asc));
        assert_eq!(next_direction(Some(Direction::Asc)), Some(Direction::Desc));
        assert_eq!(next_direction(Some(Direction::Desc)), None);
    }

    #[test]
    fn test_missing_cells_last_in_both_directions() {
        let missing = Err(CellError::missing("x"));
        let one = Ok(CellValue::from(1i64));
        assert_eq!(compare_cells(&missing, &one, Direction::Asc), Ordering::Greater);
        assert_eq!(compare_cells(&missing, &one, Direction::Desc), Ordering::Greater);
        assert_eq!(compare_cells(&Ok(CellValue::Null), &one, Direction::Desc), Ordering::Greater);
    }

    #[test]
    fn test_direction() {
        let one = Ok(CellValue::from(1i64));
        let two = Ok(CellValue::from(2i64));
        assert_eq!(compare_cells(&one, &two, Direction::Asc), Ordering::Less);
        assert_eq!(compare_cells(&one, &two, Direction::Desc), Ordering::Greater);
    }
}
