//! First-class move records.

use super::{Coordinate, Player};
use serde::{Deserialize, Serialize};

/// A stone placed by a player.
///
/// The game records every accepted move in order, so a game can be replayed
/// or checked against its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player placing the stone.
    pub player: Player,
    /// Where the stone was placed.
    pub coordinate: Coordinate,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coordinate)
    }
}
