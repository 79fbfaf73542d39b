//! Empty-count invariant: the board's counter matches its grid.

use super::super::board::count_empty;
use super::super::Game;
use super::Invariant;

/// Invariant: the grid holds `rows * columns` cells and the empty-cell
/// counter equals the number of empty cells.
pub struct EmptyCountInvariant;

impl Invariant<Game> for EmptyCountInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let size = board.rows() as usize * board.columns() as usize;
        board.cells().len() == size && board.empty_cells() == count_empty(board.cells())
    }

    fn description() -> &'static str {
        "Empty-cell counter matches the number of empty cells"
    }
}
