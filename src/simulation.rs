//! Heuristic-vs-heuristic self-play.

use crate::games::tictactoe::{GameController, GameStatus, HeuristicOpponent, OpponentError, Side};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tally of a self-play run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games won by `X`.
    pub first_wins: u32,
    /// Games won by `O`.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

/// Self-play failure. Neither variant occurs with a correct controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SimulationError {
    /// A game reached a full board while still in progress.
    #[display("Game {} stuck in progress on a full board", game)]
    Stuck {
        /// Index of the offending game.
        game: u32,
    },
    /// The opponent failed to move.
    #[display("Opponent failed: {}", _0)]
    Opponent(OpponentError),
}

impl std::error::Error for SimulationError {}

impl From<OpponentError> for SimulationError {
    fn from(err: OpponentError) -> Self {
        Self::Opponent(err)
    }
}

/// Plays `games` controller-driven games with one seeded heuristic playing
/// both sides.
///
/// # Errors
///
/// Returns [`SimulationError`] if a game cannot finish.
#[instrument]
pub fn simulate(games: u32, seed: u64) -> Result<SimulationReport, SimulationError> {
    let mut controller = GameController::default();
    let mut ai = HeuristicOpponent::seeded(seed);
    let mut report = SimulationReport {
        games,
        ..SimulationReport::default()
    };

    for game in 0..games {
        while controller.status() == GameStatus::InProgress {
            match controller.play_opponent(&mut ai) {
                Ok(_) => {}
                Err(OpponentError::NoLegalMove) => return Err(SimulationError::Stuck { game }),
                Err(err) => return Err(err.into()),
            }
        }

        match controller.status() {
            GameStatus::Won(_) => {}
            GameStatus::Draw => report.draws += 1,
            GameStatus::InProgress => return Err(SimulationError::Stuck { game }),
        }
        debug!(game, status = %controller.status(), turns = controller.turn_count(), "Game finished");
        controller.reset();
    }

    report.first_wins = controller.score(Side::First);
    report.second_wins = controller.score(Side::Second);
    info!(?report, "Simulation complete");
    Ok(report)
}
