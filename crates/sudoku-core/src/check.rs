//! Placement conflict detection.

use crate::{Grid, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule violated by a proposed placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conflict {
    Row,
    Column,
    Region,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row => write!(f, "row"),
            Conflict::Column => write!(f, "column"),
            Conflict::Region => write!(f, "region"),
        }
    }
}

/// Outcome of checking a proposed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// No rule is violated, or the cell already holds the proposed value.
    Valid,
    /// The placement collides with existing digits.
    Invalid(Vec<Conflict>),
}

/// Collect the rules violated by placing `value` at `pos`.
///
/// The checks are independent and the result order is fixed: row, then
/// column, then region.
pub fn placement_conflicts(grid: &Grid, pos: Position, value: u8) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    if grid.row_contains(pos.row, value) {
        conflicts.push(Conflict::Row);
    }
    if grid.column_contains(pos.col, value) {
        conflicts.push(Conflict::Column);
    }
    if grid.region_contains(pos.row, pos.col, value) {
        conflicts.push(Conflict::Region);
    }
    conflicts
}

/// Check whether `value` may be placed at `pos`.
///
/// Confirming a digit the cell already holds is valid even though that
/// digit collides with itself in its row, column, and region.
pub fn check_placement(grid: &Grid, pos: Position, value: u8) -> Placement {
    let conflicts = placement_conflicts(grid, pos, value);
    if conflicts.is_empty() || grid.get(pos) == value {
        Placement::Valid
    } else {
        Placement::Invalid(conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    fn grid() -> Grid {
        Grid::from_string(PUZZLE).unwrap()
    }

    #[test]
    fn test_valid_placement_has_no_conflicts() {
        let a2 = Position::new(0, 1);
        assert_eq!(placement_conflicts(&grid(), a2, 3), vec![]);
        assert_eq!(check_placement(&grid(), a2, 3), Placement::Valid);
    }

    #[test]
    fn test_row_conflict() {
        let a2 = Position::new(0, 1);
        assert_eq!(placement_conflicts(&grid(), a2, 8), vec![Conflict::Row]);
    }

    #[test]
    fn test_row_and_region_conflict() {
        let a2 = Position::new(0, 1);
        assert_eq!(
            placement_conflicts(&grid(), a2, 1),
            vec![Conflict::Row, Conflict::Region]
        );
    }

    #[test]
    fn test_all_three_conflicts() {
        let a2 = Position::new(0, 1);
        assert_eq!(
            placement_conflicts(&grid(), a2, 2),
            vec![Conflict::Row, Conflict::Column, Conflict::Region]
        );
    }

    #[test]
    fn test_confirming_existing_value_is_valid() {
        // A1 already holds a 1; the 1 collides with itself everywhere but
        // the placement is still accepted.
        let a1 = Position::new(0, 0);
        assert_eq!(grid().get(a1), 1);
        assert_eq!(
            placement_conflicts(&grid(), a1, 1),
            vec![Conflict::Row, Conflict::Column, Conflict::Region]
        );
        assert_eq!(check_placement(&grid(), a1, 1), Placement::Valid);
    }

    #[test]
    fn test_conflicting_placement_is_rejected() {
        let a2 = Position::new(0, 1);
        assert_eq!(
            check_placement(&grid(), a2, 2),
            Placement::Invalid(vec![Conflict::Row, Conflict::Column, Conflict::Region])
        );
    }

    #[test]
    fn test_conflict_serialization() {
        assert_eq!(serde_json::to_string(&Conflict::Row).unwrap(), "\"row\"");
        assert_eq!(
            serde_json::to_string(&[Conflict::Row, Conflict::Column, Conflict::Region]).unwrap(),
            "[\"row\",\"column\",\"region\"]"
        );
    }
}
