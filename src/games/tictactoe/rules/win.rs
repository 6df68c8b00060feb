//! Win detection logic for tic-tac-toe.

use super::super::{Board, LineId, Side};
use tracing::instrument;

/// Every line whose three cells share one mark, in enumeration order.
///
/// A single move can complete two lines at once; both are reported.
#[instrument(skip(board))]
pub fn completed_lines(board: &Board) -> Vec<(LineId, Side)> {
    board
        .lines()
        .filter_map(|line| line.tally().complete().map(|side| (line.id(), side)))
        .collect()
}

/// The side owning the first completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Side> {
    board.lines().find_map(|line| line.tally().complete())
}
