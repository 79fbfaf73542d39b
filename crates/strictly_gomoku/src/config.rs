//! Construction-time game configuration.

use super::{Board, CellState, Game, GamePhase, GomokuError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Options for building a [`Game`].
///
/// Deserializes from any serde format; every field is optional and falls
/// back to a 15×15 board with five in a row and black to move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows.
    #[serde(default = "default_rows")]
    rows: i32,
    /// Number of columns.
    #[serde(default = "default_columns")]
    columns: i32,
    /// Length of a winning run.
    #[serde(default = "default_win_length")]
    win_length: i32,
    /// Optional row-major starting grid of `rows * columns` cells.
    #[serde(default)]
    initial_grid: Option<Vec<CellState>>,
    /// Phase the game starts (and restarts) in.
    #[serde(default)]
    starting_phase: Option<GamePhase>,
}

fn default_rows() -> i32 {
    15
}

fn default_columns() -> i32 {
    15
}

fn default_win_length() -> i32 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            win_length: default_win_length(),
            initial_grid: None,
            starting_phase: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration for an empty board.
    pub fn new(rows: i32, columns: i32, win_length: i32) -> Self {
        Self {
            rows,
            columns,
            win_length,
            ..Self::default()
        }
    }

    /// Seeds the board with a row-major grid.
    pub fn with_initial_grid(mut self, grid: Vec<CellState>) -> Self {
        self.initial_grid = Some(grid);
        self
    }

    /// Sets the starting phase.
    pub fn with_starting_phase(mut self, phase: GamePhase) -> Self {
        self.starting_phase = Some(phase);
        self
    }

    /// Overrides the board dimensions and win length where given.
    pub fn with_overrides(
        mut self,
        rows: Option<i32>,
        columns: Option<i32>,
        win_length: Option<i32>,
    ) -> Self {
        if let Some(rows) = rows {
            self.rows = rows;
        }
        if let Some(columns) = columns {
            self.columns = columns;
        }
        if let Some(win_length) = win_length {
            self.win_length = win_length;
        }
        self
    }

    /// Builds the board described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns the construction errors of [`Board::new`].
    pub fn build_board(&self) -> Result<Board, GomokuError> {
        Board::new(
            self.rows,
            self.columns,
            self.win_length,
            self.initial_grid.clone(),
        )
    }

    /// Builds a game from this configuration.
    ///
    /// # Errors
    ///
    /// Returns the construction errors of [`Board::new`].
    #[instrument(skip(self), fields(rows = self.rows, columns = self.columns, win_length = self.win_length))]
    pub fn build(&self) -> Result<Game, GomokuError> {
        let game = Game::new(self.build_board()?, self.starting_phase);
        info!(phase = %game.phase(), "Game built from config");
        Ok(game)
    }
}
