//! History consistency invariant: recorded moves match the board.

use super::super::{CellState, Game};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every recorded move's cell holds that player's stone, no cell
/// is recorded twice, and the stones on the board are exactly the seeded
/// stones plus the recorded moves.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let mut seen = HashSet::new();

        for mov in game.history() {
            if !seen.insert(mov.coordinate) {
                return false;
            }
            if board.get(mov.coordinate) != Ok(mov.player.stone()) {
                return false;
            }
        }

        let occupied = board
            .cells()
            .iter()
            .filter(|cell| **cell != CellState::Empty)
            .count();

        occupied == game.seeded_stones() + game.history().len()
    }

    fn description() -> &'static str {
        "Move history matches the stones on the board"
    }
}
