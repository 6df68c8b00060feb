//! Alternating side invariant: sides alternate starting from the first side.

use super::super::{GameController, GameStatus};
use super::Invariant;

/// Invariant: while in progress, the side to move follows from the turn count.
///
/// Even turn counts belong to the session's first side. Terminal games are
/// exempt because a win hands the turn indicator back to the winner.
pub struct AlternatingSideInvariant;

impl Invariant<GameController> for AlternatingSideInvariant {
    fn holds(game: &GameController) -> bool {
        if game.status() != GameStatus::InProgress {
            return true;
        }

        let expected = if game.turn_count() % 2 == 0 {
            game.first_side()
        } else {
            game.first_side().opponent()
        };
        game.current_side() == expected
    }

    fn description() -> &'static str {
        "Sides alternate starting from the first side"
    }
}
