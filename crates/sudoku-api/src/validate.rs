//! Request-field validation and sanitization.
//!
//! Fields are checked in a fixed order and the first failing rule wins:
//! coordinate, then puzzle, then value for check requests; puzzle alone for
//! solve requests. The wire form of a puzzle allows only digits 1-9 and
//! `'.'`; the coordinate is sanitized to a 0-based position and the value
//! to a digit before anything reaches the engine.

use serde::Deserialize;
use sudoku_core::{Grid, Position};

use crate::error::ApiError;

/// Raw body of a check request; every field is optional until validated.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub coordinate: Option<String>,
    pub puzzle: Option<String>,
    pub value: Option<String>,
}

/// Raw body of a solve request.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub puzzle: Option<String>,
}

/// A fully validated check request.
#[derive(Debug)]
pub struct CheckInput {
    pub grid: Grid,
    pub pos: Position,
    pub value: u8,
}

/// Validate a check request body.
pub fn check(req: CheckRequest) -> Result<CheckInput, ApiError> {
    let coordinate = req.coordinate.ok_or(ApiError::MissingFields)?;
    let pos = Position::from_coordinate(&coordinate).ok_or(ApiError::InvalidCoordinate)?;

    let puzzle = req.puzzle.ok_or(ApiError::MissingFields)?;
    let grid = puzzle_grid(&puzzle)?;

    let value = req.value.ok_or(ApiError::MissingFields)?;
    let value = parse_value(&value).ok_or(ApiError::InvalidValue)?;

    Ok(CheckInput { grid, pos, value })
}

/// Validate a solve request body.
pub fn solve(req: SolveRequest) -> Result<Grid, ApiError> {
    let puzzle = req.puzzle.ok_or(ApiError::MissingPuzzle)?;
    puzzle_grid(&puzzle)
}

/// Check the puzzle string against the wire rules (exactly 81 characters,
/// each a digit 1-9 or `'.'`), then build the grid.
fn puzzle_grid(puzzle: &str) -> Result<Grid, ApiError> {
    if puzzle.chars().count() != 81 {
        return Err(ApiError::PuzzleLength);
    }
    if !puzzle.chars().all(|ch| ch == '.' || matches!(ch, '1'..='9')) {
        return Err(ApiError::PuzzleCharacters);
    }
    Ok(Grid::from_string(puzzle)?)
}

/// Parse the value field: a single digit 1-9.
fn parse_value(value: &str) -> Option<u8> {
    let mut chars = value.chars();
    let digit = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match digit {
        '1'..='9' => Some(digit as u8 - b'0'),
        _ => None,
    }
}
