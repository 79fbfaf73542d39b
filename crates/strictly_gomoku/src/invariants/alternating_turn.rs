//! Alternating turn invariant: players alternate, starting from the
//! configured first player.

use super::super::Game;
use super::Invariant;

/// Invariant: consecutive moves are by different players, the first move
/// is by the starting player, and a running game expects the opponent of
/// the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return true;
        };

        if game.starting_phase().to_move() != Some(first.player) {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match (game.phase().to_move(), history.last()) {
            (Some(to_move), Some(last)) => to_move == last.player.opponent(),
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns from the starting player"
    }
}
