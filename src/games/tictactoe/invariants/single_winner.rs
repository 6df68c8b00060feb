//! Single winner invariant: the status agrees with the board's lines.

use super::super::rules::win::completed_lines;
use super::super::{GameController, GameStatus};
use super::Invariant;

/// Invariant: completed lines belong to at most one side, and the status
/// names that side exactly when such a line exists.
pub struct SingleWinnerInvariant;

impl Invariant<GameController> for SingleWinnerInvariant {
    fn holds(game: &GameController) -> bool {
        let completed = completed_lines(game.board());
        let owner = completed.first().map(|(_, side)| *side);

        if completed.iter().any(|(_, side)| Some(*side) != owner) {
            return false;
        }

        match (game.status(), owner) {
            (GameStatus::Won(side), Some(owner)) => side == owner,
            (GameStatus::Won(_), None) => false,
            (_, Some(_)) => false,
            (_, None) => true,
        }
    }

    fn description() -> &'static str {
        "At most one side owns completed lines and the status names it"
    }
}
