//! Win detection around a freshly placed stone.
//!
//! Only the cells that could form a run through the placed stone are
//! inspected: for each of the four line directions the segment is clipped to
//! `win_length - 1` steps either side and to the board edge, then a window of
//! `win_length` cells slides across it. A window wins when the signed sum of
//! its cells (black +1, white -1, empty 0) has magnitude `win_length`, which
//! only happens when every cell holds a stone of the same colour.

use super::super::{Board, CellState, Coordinate, GomokuError};
use tracing::{debug, instrument, trace};

/// A line through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Direction {
    /// Along a row (Δrow = 0).
    Horizontal,
    /// Along a column (Δcolumn = 0).
    Vertical,
    /// Top-left to bottom-right (Δrow = Δcolumn).
    MainDiagonal,
    /// Bottom-left to top-right (Δrow = -Δcolumn).
    AntiDiagonal,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::MainDiagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(d_row, d_column)` in the positive sense of this direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// The run of cells along one direction that could hold a winning line
/// through a given cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    start: Coordinate,
    end: Coordinate,
    direction: Direction,
}

impl Segment {
    /// Clips the segment through `cell` to `win_length - 1` steps each way
    /// and to the board edge.
    pub fn through(board: &Board, cell: Coordinate, direction: Direction) -> Self {
        let (d_row, d_column) = direction.step();
        let reach = board.win_length() - 1;

        let back = reach
            .min(steps_to_edge(cell.row, -d_row, board.rows()))
            .min(steps_to_edge(cell.column, -d_column, board.columns()));
        let forward = reach
            .min(steps_to_edge(cell.row, d_row, board.rows()))
            .min(steps_to_edge(cell.column, d_column, board.columns()));

        Self {
            start: cell.offset(-back * d_row, -back * d_column),
            end: cell.offset(forward * d_row, forward * d_column),
            direction,
        }
    }

    /// First cell of the segment (furthest in the negative sense).
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Last cell of the segment (furthest in the positive sense).
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Number of cells in the segment.
    pub fn len(&self) -> usize {
        distance(self.start, self.end) as usize + 1
    }

    /// Always false; a segment contains at least its origin cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cells from start to end.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (d_row, d_column) = self.direction.step();
        (0..self.len() as i32).map(move |i| self.start.offset(i * d_row, i * d_column))
    }

    /// Returns true if some window of `win_length` cells holds one colour.
    fn has_run(&self, board: &Board) -> Result<bool, GomokuError> {
        let win_length = board.win_length() as usize;
        if self.len() < win_length {
            trace!(direction = %self.direction, len = self.len(), "Segment too short");
            return Ok(false);
        }

        let weights = self
            .cells()
            .map(|cell| board.get(cell).map(CellState::weight))
            .collect::<Result<Vec<_>, _>>()?;

        let found = weights
            .windows(win_length)
            .any(|window| window.iter().sum::<i32>().unsigned_abs() as usize == win_length);
        Ok(found)
    }
}

/// Checks whether the stone at `cell` completes a run of `win_length`
/// same-coloured stones in any direction.
///
/// Runs longer than `win_length` also count.
///
/// # Errors
///
/// Returns [`GomokuError::OutOfBounds`] if `cell` is off the board.
#[instrument(skip(board), fields(win_length = board.win_length()))]
pub fn is_winning_move(board: &Board, cell: Coordinate) -> Result<bool, GomokuError> {
    if !board.is_on_board(cell) {
        return Err(GomokuError::OutOfBounds { coordinate: cell });
    }

    for direction in Direction::ALL {
        if Segment::through(board, cell, direction).has_run(board)? {
            debug!(%direction, "Winning run found");
            return Ok(true);
        }
    }

    Ok(false)
}

/// Number of steps from `position` towards the edge when moving by `delta`
/// along an axis of length `bound`. Unlimited when `delta` is zero.
fn steps_to_edge(position: i32, delta: i32, bound: i32) -> i32 {
    match delta.signum() {
        1 => bound - 1 - position,
        -1 => position,
        _ => i32::MAX,
    }
}

/// Number of steps between two colinear cells.
///
/// # Panics
///
/// Panics if the cells do not share a row, column or diagonal. Callers only
/// pass endpoints derived from one origin along one direction, so a panic
/// here is a logic defect.
pub(crate) fn distance(a: Coordinate, b: Coordinate) -> i32 {
    let d_row = (a.row - b.row).abs();
    let d_column = (a.column - b.column).abs();

    match (d_row, d_column) {
        (0, d) | (d, 0) => d,
        (r, c) if r == c => r,
        _ => panic!("Cells {} and {} are not in a single row, column, or diagonal", a, b),
    }
}
