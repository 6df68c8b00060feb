//! Filled-count invariant: every accepted move fills exactly one cell.

use super::super::GameController;
use super::Invariant;

/// Invariant: the number of filled cells equals the turn count.
pub struct FilledCountInvariant;

impl Invariant<GameController> for FilledCountInvariant {
    fn holds(game: &GameController) -> bool {
        game.board().filled_count() == game.turn_count() as usize
    }

    fn description() -> &'static str {
        "Filled cells match the turn count"
    }
}
