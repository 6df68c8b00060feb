//! Computer-controlled opponents.

use super::action::MoveError;
use super::board::Board;
use super::position::Position;
use super::types::Side;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

/// Why an opponent could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum OpponentError {
    /// Every cell is already filled.
    #[display("No legal move: the board is full")]
    NoLegalMove,
    /// The controller refused the chosen move.
    #[display("Opponent move rejected: {}", _0)]
    Rejected(MoveError),
}

impl std::error::Error for OpponentError {}

/// Trait for opponents that choose their own moves.
pub trait Opponent {
    /// Chooses an unfilled cell for `own` to play.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::NoLegalMove`] if the board is full.
    fn select_move(&mut self, board: &Board, own: Side) -> Result<Position, OpponentError>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// One-ply heuristic opponent.
///
/// Rules are applied as layered overrides, lowest priority first, so the
/// last rule that finds a candidate decides the move:
///
/// 1. any unfilled cell, uniformly at random;
/// 2. a random unfilled cell of a random line holding exactly one own mark
///    and two empty cells;
/// 3. the empty cell of the first line holding two adversary marks;
/// 4. the empty cell of the first line holding two own marks.
///
/// It does not look further ahead and does not detect forks.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks an index below `len`, skipping the random source when there is
    /// only one candidate.
    fn random_index(&mut self, len: usize) -> usize {
        if len > 1 { self.rng.gen_range(0..len) } else { 0 }
    }

    fn random_cell(&mut self, cells: &[Position]) -> Option<Position> {
        if cells.is_empty() {
            return None;
        }
        let i = self.random_index(cells.len());
        Some(cells[i])
    }

    /// Empty cell of the first line where `side` holds exactly two marks and
    /// the third cell is empty.
    fn first_two_in_line(board: &Board, side: Side) -> Option<Position> {
        board
            .lines()
            .find(|line| line.tally().only(side, 2))
            .and_then(|line| line.unfilled_cells().first().copied())
    }
}

impl HeuristicOpponent<ChaCha8Rng> {
    /// Creates a deterministic opponent from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates an opponent seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Opponent for HeuristicOpponent<R> {
    #[instrument(skip(self, board))]
    fn select_move(&mut self, board: &Board, own: Side) -> Result<Position, OpponentError> {
        let adversary = own.opponent();

        // Default
        let mut choice = self
            .random_cell(&board.unfilled_cells())
            .ok_or(OpponentError::NoLegalMove)?;
        trace!(position = %choice, "Random fallback");

        // Progress
        let progress: Vec<_> = board
            .lines()
            .filter(|line| line.tally().only(own, 1))
            .collect();
        if !progress.is_empty() {
            let line = progress[self.random_index(progress.len())];
            if let Some(pos) = self.random_cell(&line.unfilled_cells()) {
                trace!(line = %line.id(), position = %pos, "Progress");
                choice = pos;
            }
        }

        // Block
        if let Some(pos) = Self::first_two_in_line(board, adversary) {
            trace!(position = %pos, "Block");
            choice = pos;
        }

        // Win
        if let Some(pos) = Self::first_two_in_line(board, own) {
            trace!(position = %pos, "Win");
            choice = pos;
        }

        debug!(side = %own, position = %choice, "Heuristic chose position");
        Ok(choice)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
