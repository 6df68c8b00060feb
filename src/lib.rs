//! Strictly Noughts library - tic-tac-toe rule engine
//!
//! The engine covers the game state machine, win/draw detection and a
//! one-ply heuristic opponent. Rendering is left to the caller, which
//! observes state through queries and [`GameEvent`]s.
//!
//! # Architecture
//!
//! - **Controller**: turn order, move validation, scoring and resets
//! - **Opponent**: layered win/block/progress/random heuristic
//! - **Session**: human-vs-opponent play with a paced, cancellable reply
//! - **Simulation**: heuristic self-play
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{GameController, GameStatus, Position, Side};
//!
//! let mut game = GameController::default();
//! for (n, side) in [(1, Side::First), (4, Side::Second), (2, Side::First), (5, Side::Second), (3, Side::First)] {
//!     game.submit_move(Position::from_number(n).unwrap(), side).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Side::First));
//! assert_eq!(game.score(Side::First), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod simulation;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Self-play
pub use simulation::{SimulationError, SimulationReport, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, GameController, GameEvent, GameSnapshot, GameStatus, HeuristicOpponent, Line,
    LineId, LineTally, Mark, Move, MoveError, MoveOutcome, Opponent, OpponentError, Position,
    Scores, Side,
};

// Crate-level exports - Rules and checks
pub use games::tictactoe::{contracts, invariants, rules};
