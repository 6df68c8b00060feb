//! Move preconditions.
//!
//! Each precondition is checked before the controller touches any state, so
//! a rejected move leaves the game exactly as it was.

use super::action::{Move, MoveError};
use super::controller::GameController;
use tracing::{instrument, warn};

/// Precondition: the game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(game: &GameController) -> Result<(), MoveError> {
        if game.status().is_terminal() {
            warn!(status = %game.status(), "Move rejected: game is over");
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the moving side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        if mov.side != game.current_side() {
            warn!(expected = %game.current_side(), "Move rejected: wrong side");
            Err(MoveError::WrongSide(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be unfilled.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            warn!("Move rejected: cell is filled");
            Err(MoveError::CellFilled(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is running, it is the
/// side's turn and the cell is unfilled.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameController) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        SidesTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}
