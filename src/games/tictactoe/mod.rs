//! Tic-tac-toe rule engine.
//!
//! [`GameController`] owns a [`Board`], validates moves through the
//! [`contracts`] preconditions, detects wins and draws via [`rules`], and
//! keeps the session's scores. [`HeuristicOpponent`] can play either side.

mod action;
mod board;
pub mod contracts;
mod controller;
pub mod invariants;
mod line;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use board::Board;
pub use controller::{GameController, GameEvent, GameSnapshot, GameStatus, Scores};
pub use line::{Line, LineId, LineTally};
pub use opponent::{HeuristicOpponent, Opponent, OpponentError};
pub use position::Position;
pub use types::{Cell, Mark, Side};
