//! Core domain types for gomoku.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Black stones (moves first by default).
    Black,
    /// White stones.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the cell state this player's stones occupy.
    pub fn stone(self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

/// State of a single board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum CellState {
    /// No stone.
    #[default]
    Empty,
    /// Black stone.
    Black,
    /// White stone.
    White,
}

impl CellState {
    /// Layout symbol: `'_'` empty, `'X'` black, `'O'` white.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '_',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    /// Parses a layout symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(CellState::Empty),
            'X' => Some(CellState::Black),
            'O' => Some(CellState::White),
            _ => None,
        }
    }

    /// Signed weight used by run detection: black +1, white -1, empty 0.
    pub(crate) fn weight(self) -> i32 {
        match self {
            CellState::Empty => 0,
            CellState::Black => 1,
            CellState::White => -1,
        }
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.stone()
    }
}
