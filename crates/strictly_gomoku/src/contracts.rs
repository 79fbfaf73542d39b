//! Contract-based validation for move submission.
//!
//! A contract pairs preconditions, checked before any mutation, with
//! postconditions relating the state before and after a move.

use super::invariants::{GomokuInvariants, InvariantSet, InvariantViolation};
use super::{Coordinate, Game, GomokuError, Player};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Value the preconditions establish for the transition.
    type Approved;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Approved, GomokuError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not reached a terminal phase.
///
/// Yields the player whose stone is about to be placed.
pub struct GameNotEnded;

impl GameNotEnded {
    /// Returns the acting player, or `GameEnded`.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<Player, GomokuError> {
        game.phase()
            .to_move()
            .ok_or(GomokuError::GameEnded { phase: game.phase() })
    }
}

/// Precondition: the coordinate lies on the board.
pub struct OnBoard;

impl OnBoard {
    /// Returns `OutOfBounds` for off-board coordinates.
    #[instrument(skip(game))]
    pub fn check(coordinate: Coordinate, game: &Game) -> Result<(), GomokuError> {
        if game.board().is_on_board(coordinate) {
            Ok(())
        } else {
            Err(GomokuError::OutOfBounds { coordinate })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Returns `CellOccupied` for cells holding a stone.
    #[instrument(skip(game))]
    pub fn check(coordinate: Coordinate, game: &Game) -> Result<(), GomokuError> {
        if game.board().can_place(coordinate) {
            Ok(())
        } else {
            Err(GomokuError::CellOccupied { coordinate })
        }
    }
}

/// Composite precondition, checked in order: game running, coordinate on
/// the board, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the acting player.
    #[instrument(skip(game))]
    pub fn check(coordinate: Coordinate, game: &Game) -> Result<Player, GomokuError> {
        let player = GameNotEnded::check(game)?;
        OnBoard::check(coordinate, game)?;
        CellIsEmpty::check(coordinate, game)?;
        Ok(player)
    }
}

/// Contract for submitting a move.
///
/// Postconditions:
/// - exactly one cell went from empty to occupied
/// - exactly one move was recorded
/// - every game invariant holds
pub struct MoveContract;

impl Contract<Game, Coordinate> for MoveContract {
    type Approved = Player;

    fn pre(game: &Game, coordinate: &Coordinate) -> Result<Player, GomokuError> {
        LegalMove::check(*coordinate, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if before.board().empty_cells() != after.board().empty_cells() + 1 {
            violations.push(InvariantViolation::new("Move filled exactly one cell"));
        }
        if before.history().len() + 1 != after.history().len() {
            violations.push(InvariantViolation::new("Move was recorded exactly once"));
        }
        if let Err(mut found) = GomokuInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postconditions violated");
            Err(violations)
        }
    }
}

/// Runs the [`MoveContract`] postconditions and joins any violations into
/// one message.
#[cfg(debug_assertions)]
#[instrument(skip_all)]
pub(crate) fn postcondition_report(before: &Game, after: &Game) -> Option<String> {
    MoveContract::post(before, after).err().map(|violations| {
        violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    })
}
