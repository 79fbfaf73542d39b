//! Read-only snapshot of a game.

use super::GamePhase;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What a host needs to show a game: whether it ended, its phase, and the
/// board rendered one string per row (`'_'` empty, `'X'` black, `'O'` white).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// True once the phase is terminal.
    has_ended: bool,
    /// Current phase.
    phase: GamePhase,
    /// Board rows, top to bottom.
    board_rows: Vec<String>,
}
