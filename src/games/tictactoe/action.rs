//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the side's intent and can be validated independently of execution.

use super::controller::GameStatus;
use super::line::LineId;
use super::position::Position;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Why a move was rejected.
///
/// A rejected move never changes the board, the turn count or the side to
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell is already filled.
    #[display("{} is already filled", _0)]
    CellFilled(Position),

    /// It is not this side's turn.
    #[display("It's not {}'s turn", _0)]
    WrongSide(Side),

    /// The game has already ended; reset first.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of an accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// A mark was placed.
    Placed {
        /// The move that was applied.
        applied: Move,
        /// Status after evaluating every line.
        status: GameStatus,
        /// Lines completed by this move, for highlighting.
        completed: Vec<LineId>,
    },
    /// The game was terminal, so the command restarted it instead.
    Reset,
}

impl MoveOutcome {
    /// Status after the move, if a mark was placed.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            MoveOutcome::Placed { status, .. } => Some(*status),
            MoveOutcome::Reset => None,
        }
    }
}
