//! Game facade: validate, place, detect, transition.

use super::contracts::{Contract, MoveContract};
#[cfg(debug_assertions)]
use super::contracts::postcondition_report;
use super::rules::is_winning_move;
use super::{Board, CellState, Coordinate, GameConfig, GamePhase, GomokuError, Move, Status};
use super::phases::transition;
use tracing::{debug, info, instrument, warn};

/// A single gomoku game.
///
/// Owns its board outright; all mutation goes through
/// [`Game::submit_move`] and [`Game::restart`]. A host serving one game to
/// concurrent clients must serialize calls (for example behind one mutex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) phase: GamePhase,
    starting_phase: GamePhase,
    pub(crate) history: Vec<Move>,
    seeded_stones: usize,
}

impl Game {
    /// Creates a game on `board`, starting in `starting_phase`
    /// (`BlackToMove` when `None`).
    ///
    /// Any starting phase is accepted, including terminal ones; a game
    /// started in a terminal phase rejects every move until restarted into
    /// that same phase.
    #[instrument(skip(board), fields(rows = board.rows(), columns = board.columns()))]
    pub fn new(board: Board, starting_phase: Option<GamePhase>) -> Self {
        let starting_phase = starting_phase.unwrap_or_default();
        let seeded_stones = board
            .cells()
            .iter()
            .filter(|cell| **cell != CellState::Empty)
            .count();
        debug!(%starting_phase, seeded_stones, "Game created");

        Self {
            board,
            phase: starting_phase,
            starting_phase,
            history: Vec::new(),
            seeded_stones,
        }
    }

    /// Replays a sequence of moves on a freshly built game.
    ///
    /// # Errors
    ///
    /// Returns the construction error of the configuration, or the first
    /// move error encountered.
    #[instrument(skip(config, moves), fields(moves = moves.len()))]
    pub fn replay(config: &GameConfig, moves: &[Coordinate]) -> Result<Self, GomokuError> {
        let mut game = config.build()?;
        for coordinate in moves {
            game.submit_move(*coordinate)?;
        }
        Ok(game)
    }

    /// Places the current player's stone and advances the phase.
    ///
    /// Checks, in order, that the game is running, the coordinate is on the
    /// board, and the cell is empty. A rejected move changes nothing.
    ///
    /// Release builds do O(`win_length`) work per move. Debug builds also
    /// clone the game and re-check every invariant afterwards, which costs
    /// O(rows × columns); a failed check is an engine bug and trips a
    /// `debug_assert!`, never a caller mistake.
    ///
    /// # Errors
    ///
    /// [`GomokuError::GameEnded`], [`GomokuError::OutOfBounds`] or
    /// [`GomokuError::CellOccupied`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_move(&mut self, coordinate: Coordinate) -> Result<Status, GomokuError> {
        let player = MoveContract::pre(self, &coordinate).inspect_err(|err| {
            warn!(%err, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place_stone(player, coordinate)?;
        let applied = Move::new(player, coordinate);
        self.history.push(applied);

        let was_winning_move = is_winning_move(&self.board, coordinate)?;
        let more_moves_available = self.board.has_moves_left();
        let next = transition(self.phase, was_winning_move, more_moves_available);

        debug!(%applied, was_winning_move, more_moves_available, %next, "Move applied");
        if let Some(outcome) = next.outcome() {
            info!(%outcome, moves = self.history.len(), "Game ended");
        }
        self.phase = next;

        #[cfg(debug_assertions)]
        {
            let report = postcondition_report(&before, self);
            debug_assert!(
                report.is_none(),
                "Postcondition failed: {}",
                report.unwrap_or_default()
            );
        }

        Ok(self.status())
    }

    /// Snapshot of the game. Has no side effects.
    pub fn status(&self) -> Status {
        Status::new(self.phase.is_terminal(), self.phase, self.board.to_rows())
    }

    /// Clears the board and history and returns to the starting phase.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn restart(&mut self) -> Status {
        self.board.reset();
        self.history.clear();
        self.seeded_stones = 0;
        self.phase = self.starting_phase;
        info!(phase = %self.phase, "Game restarted");
        self.status()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the phase the game starts and restarts in.
    pub fn starting_phase(&self) -> GamePhase {
        self.starting_phase
    }

    /// Returns true once the phase is terminal.
    pub fn has_ended(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of stones that were on the board before the first move.
    pub fn seeded_stones(&self) -> usize {
        self.seeded_stones
    }
}
