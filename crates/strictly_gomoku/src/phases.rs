//! Game phases and the turn/termination state machine.
//!
//! A game is always in exactly one [`GamePhase`]. Two phases accept moves;
//! the three terminal phases are absorbing.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of a game.
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
    strum::EnumString,
)]
pub enum GamePhase {
    /// Black places the next stone.
    #[default]
    BlackToMove,
    /// White places the next stone.
    WhiteToMove,
    /// Black completed a run.
    BlackWins,
    /// White completed a run.
    WhiteWins,
    /// Board filled with no run.
    Draw,
}

impl GamePhase {
    /// Returns true for win and draw phases.
    pub fn is_terminal(self) -> bool {
        match self {
            GamePhase::BlackToMove | GamePhase::WhiteToMove => false,
            GamePhase::BlackWins | GamePhase::WhiteWins | GamePhase::Draw => true,
        }
    }

    /// Player whose turn it is, if the game is still running.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GamePhase::BlackToMove => Some(Player::Black),
            GamePhase::WhiteToMove => Some(Player::White),
            GamePhase::BlackWins | GamePhase::WhiteWins | GamePhase::Draw => None,
        }
    }

    /// Outcome of a finished game.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::BlackWins => Some(Outcome::Winner(Player::Black)),
            GamePhase::WhiteWins => Some(Outcome::Winner(Player::White)),
            GamePhase::Draw => Some(Outcome::Draw),
            GamePhase::BlackToMove | GamePhase::WhiteToMove => None,
        }
    }
}

/// Computes the phase following an accepted move.
///
/// | phase | winning move | moves left | next |
/// |---|---|---|---|
/// | `BlackToMove` | yes | any | `BlackWins` |
/// | `WhiteToMove` | yes | any | `WhiteWins` |
/// | `BlackToMove` | no | yes | `WhiteToMove` |
/// | `WhiteToMove` | no | yes | `BlackToMove` |
/// | either to-move | no | no | `Draw` |
/// | terminal | any | any | unchanged |
///
/// Terminal phases map to themselves; callers reject moves before getting
/// here, so that row is never exercised by a running game.
#[instrument]
pub fn transition(phase: GamePhase, was_winning_move: bool, more_moves_available: bool) -> GamePhase {
    match (phase, was_winning_move, more_moves_available) {
        (GamePhase::BlackToMove, true, _) => GamePhase::BlackWins,
        (GamePhase::WhiteToMove, true, _) => GamePhase::WhiteWins,
        (GamePhase::BlackToMove, false, true) => GamePhase::WhiteToMove,
        (GamePhase::WhiteToMove, false, true) => GamePhase::BlackToMove,
        (GamePhase::BlackToMove | GamePhase::WhiteToMove, false, false) => GamePhase::Draw,
        (GamePhase::BlackWins, _, _) => GamePhase::BlackWins,
        (GamePhase::WhiteWins, _, _) => GamePhase::WhiteWins,
        (GamePhase::Draw, _, _) => GamePhase::Draw,
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
