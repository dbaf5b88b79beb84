//! Depth-first backtracking solver.

use crate::check::placement_conflicts;
use crate::Grid;

/// Sudoku solver using classic depth-first backtracking.
pub struct Solver;

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the solved grid if successful.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the grid in place, returning whether a full solution was
    /// reached.
    ///
    /// Targets the first empty cell in row-major order and tries candidates
    /// 1 through 9 in ascending order, recursing after each conflict-free
    /// placement. A cell is reset to empty whenever its subtree fails, so
    /// on overall failure the grid holds only its original fill-in.
    pub fn solve_in_place(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            None => return true,
        };

        for value in 1..=9 {
            if placement_conflicts(grid, pos, value).is_empty() {
                grid.set(pos, value);
                if self.solve_in_place(grid) {
                    return true;
                }
                grid.clear(pos);
            }
        }

        false
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
