//! Error types for board construction and move submission.

use super::coordinate::Coordinate;
use super::phases::GamePhase;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Error raised by board construction or move submission.
///
/// Construction errors (`InvalidDimension`, `InvalidWinLength`,
/// `InvalidInitialState`) mean no board or game was built. Move errors leave
/// the game exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GomokuError {
    /// Row or column count is below one.
    #[display("Board must be at least 1x1, got {rows}x{columns}")]
    InvalidDimension {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        columns: i32,
    },

    /// Win length is below two or exceeds a board dimension.
    #[display("Win length {win_length} must be between 2 and {max}")]
    InvalidWinLength {
        /// Requested win length.
        win_length: i32,
        /// Largest win length the board allows.
        max: i32,
    },

    /// Supplied initial grid does not describe the board.
    #[display("Initial board state is invalid: {reason}")]
    InvalidInitialState {
        /// What was wrong with the grid.
        reason: String,
    },

    /// Coordinate lies outside the board.
    #[display("Cell {coordinate} is off the board")]
    OutOfBounds {
        /// Offending coordinate.
        coordinate: Coordinate,
    },

    /// Target cell already holds a stone.
    #[display("Cell {coordinate} is already occupied")]
    CellOccupied {
        /// Offending coordinate.
        coordinate: Coordinate,
    },

    /// Every cell is occupied.
    #[display("No cells left to place a stone on")]
    NoMovesLeft,

    /// The game already reached a terminal phase.
    #[display("Game has ended ({phase})")]
    GameEnded {
        /// Terminal phase the game is in.
        phase: GamePhase,
    },
}

impl GomokuError {
    /// Returns the data-free kind of this error.
    pub fn kind(&self) -> GomokuErrorKind {
        match self {
            GomokuError::InvalidDimension { .. } => GomokuErrorKind::InvalidDimension,
            GomokuError::InvalidWinLength { .. } => GomokuErrorKind::InvalidWinLength,
            GomokuError::InvalidInitialState { .. } => GomokuErrorKind::InvalidInitialState,
            GomokuError::OutOfBounds { .. } => GomokuErrorKind::OutOfBounds,
            GomokuError::CellOccupied { .. } => GomokuErrorKind::CellOccupied,
            GomokuError::NoMovesLeft => GomokuErrorKind::NoMovesLeft,
            GomokuError::GameEnded { .. } => GomokuErrorKind::GameEnded,
        }
    }

    /// Returns true for errors rejecting a move (as opposed to construction).
    pub fn is_move_error(&self) -> bool {
        matches!(
            self.kind(),
            GomokuErrorKind::OutOfBounds
                | GomokuErrorKind::CellOccupied
                | GomokuErrorKind::NoMovesLeft
                | GomokuErrorKind::GameEnded
        )
    }
}

/// Kind of [`GomokuError`], suitable for wire protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GomokuErrorKind {
    /// Row or column count is below one.
    InvalidDimension,
    /// Win length out of range.
    InvalidWinLength,
    /// Initial grid mismatch.
    InvalidInitialState,
    /// Coordinate outside the grid.
    OutOfBounds,
    /// Target cell not empty.
    CellOccupied,
    /// Board full.
    NoMovesLeft,
    /// Move submitted after the game ended.
    GameEnded,
}
