//! Rectangular gomoku board with occupancy bookkeeping.

use super::coordinate::Coordinate;
use super::error::GomokuError;
use super::types::{CellState, Player};
use tracing::{debug, instrument, warn};

/// An R×C grid of cells with a fixed winning run length.
///
/// Invariants:
/// - `cells.len() == rows * columns`
/// - `empty_cells` equals the number of `CellState::Empty` entries
/// - `win_length` never changes after construction
///
/// Stones are only ever added through [`Board::place_stone`]; the only other
/// mutation is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: i32,
    columns: i32,
    win_length: i32,
    /// Cells in row-major order.
    pub(crate) cells: Vec<CellState>,
    pub(crate) empty_cells: usize,
}

impl Board {
    /// Creates a board, optionally seeded with an initial row-major grid.
    ///
    /// # Errors
    ///
    /// - [`GomokuError::InvalidDimension`] if either dimension is below one
    /// - [`GomokuError::InvalidWinLength`] if `win_length < 2` or it exceeds
    ///   a dimension
    /// - [`GomokuError::InvalidInitialState`] if the grid length is not
    ///   `rows * columns`
    #[instrument(skip(initial_grid), fields(seeded = initial_grid.is_some()))]
    pub fn new(
        rows: i32,
        columns: i32,
        win_length: i32,
        initial_grid: Option<Vec<CellState>>,
    ) -> Result<Self, GomokuError> {
        if rows < 1 || columns < 1 {
            warn!(rows, columns, "Rejected board dimensions");
            return Err(GomokuError::InvalidDimension { rows, columns });
        }

        if win_length < 2 || win_length > rows || win_length > columns {
            warn!(win_length, rows, columns, "Rejected win length");
            return Err(GomokuError::InvalidWinLength {
                win_length,
                max: rows.min(columns),
            });
        }

        let size = rows as usize * columns as usize;
        let cells = match initial_grid {
            Some(grid) if grid.len() != size => {
                warn!(expected = size, actual = grid.len(), "Rejected initial grid");
                return Err(GomokuError::InvalidInitialState {
                    reason: format!(
                        "expected {} cells for a {}x{} board, got {}",
                        size,
                        rows,
                        columns,
                        grid.len()
                    ),
                });
            }
            Some(grid) => grid,
            None => vec![CellState::Empty; size],
        };

        let empty_cells = count_empty(&cells);
        debug!(empty_cells, "Board created");

        Ok(Self {
            rows,
            columns,
            win_length,
            cells,
            empty_cells,
        })
    }

    /// Creates a board from a textual layout, one string per row.
    ///
    /// Symbols are `'_'` (empty), `'X'` (black) and `'O'` (white).
    ///
    /// # Errors
    ///
    /// Returns [`GomokuError::InvalidInitialState`] for ragged rows or unknown
    /// symbols, plus every error [`Board::new`] can return.
    #[instrument(skip(layout))]
    pub fn from_layout<S: AsRef<str>>(win_length: i32, layout: &[S]) -> Result<Self, GomokuError> {
        let rows = layout.len() as i32;
        let columns = layout
            .first()
            .map(|row| row.as_ref().chars().count() as i32)
            .unwrap_or(0);

        let mut cells = Vec::with_capacity(rows.max(0) as usize * columns.max(0) as usize);
        for (index, row) in layout.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() as i32 != columns {
                return Err(GomokuError::InvalidInitialState {
                    reason: format!("row {} has {} cells, expected {}", index, row.chars().count(), columns),
                });
            }
            for symbol in row.chars() {
                let cell = CellState::from_symbol(symbol).ok_or_else(|| {
                    GomokuError::InvalidInitialState {
                        reason: format!("unknown symbol {:?} in row {}", symbol, index),
                    }
                })?;
                cells.push(cell);
            }
        }

        Self::new(rows, columns, win_length, Some(cells))
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Length of a winning run.
    pub fn win_length(&self) -> i32 {
        self.win_length
    }

    /// Number of empty cells remaining.
    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns the state of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`GomokuError::OutOfBounds`] if the coordinate is off the board.
    pub fn get(&self, coordinate: Coordinate) -> Result<CellState, GomokuError> {
        self.index(coordinate)
            .map(|index| self.cells[index])
            .ok_or(GomokuError::OutOfBounds { coordinate })
    }

    /// Returns true if the coordinate lies within the grid.
    pub fn is_on_board(&self, coordinate: Coordinate) -> bool {
        (0..self.rows).contains(&coordinate.row) && (0..self.columns).contains(&coordinate.column)
    }

    /// Returns true if a stone can be placed at the coordinate.
    pub fn can_place(&self, coordinate: Coordinate) -> bool {
        matches!(self.get(coordinate), Ok(CellState::Empty))
    }

    /// Returns true while at least one cell is empty.
    pub fn has_moves_left(&self) -> bool {
        self.empty_cells > 0
    }

    /// Places a player's stone on an empty cell.
    ///
    /// On error the board is left untouched.
    ///
    /// # Errors
    ///
    /// - [`GomokuError::NoMovesLeft`] if the board is full
    /// - [`GomokuError::OutOfBounds`] if the coordinate is off the board
    /// - [`GomokuError::CellOccupied`] if the cell already holds a stone
    #[instrument(skip(self), fields(empty_cells = self.empty_cells))]
    pub fn place_stone(&mut self, player: Player, coordinate: Coordinate) -> Result<(), GomokuError> {
        if self.empty_cells == 0 {
            return Err(GomokuError::NoMovesLeft);
        }

        let index = self
            .index(coordinate)
            .ok_or(GomokuError::OutOfBounds { coordinate })?;

        if self.cells[index] != CellState::Empty {
            return Err(GomokuError::CellOccupied { coordinate });
        }

        self.cells[index] = player.stone();
        self.empty_cells -= 1;
        debug!(empty_cells = self.empty_cells, "Stone placed");
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Empty);
        self.empty_cells = self.cells.len();
        debug!(empty_cells = self.empty_cells, "Board reset");
    }

    /// Every empty coordinate in row-major order.
    pub fn valid_moves(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == CellState::Empty)
            .map(|(index, _)| self.coordinate_of(index))
            .collect()
    }

    /// Renders each row as a string of layout symbols.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.columns as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        self.is_on_board(coordinate)
            .then(|| coordinate.row as usize * self.columns as usize + coordinate.column as usize)
    }

    fn coordinate_of(&self, index: usize) -> Coordinate {
        let columns = self.columns as usize;
        Coordinate::new((index / columns) as i32, (index % columns) as i32)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Counts empty cells in a grid.
pub(crate) fn count_empty(cells: &[CellState]) -> usize {
    cells.iter().filter(|cell| **cell == CellState::Empty).count()
}
