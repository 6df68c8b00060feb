//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all cells filled).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| cell.filled())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, Side};
    use super::super::win::winner;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Side::First);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let layout = [
            Side::First,
            Side::Second,
            Side::First,
            Side::Second,
            Side::First,
            Side::First,
            Side::Second,
            Side::First,
            Side::Second,
        ];
        for (pos, side) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, side);
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Side::First);
        board.place(Position::TopCenter, Side::First);
        board.place(Position::TopRight, Side::First);
        board.place(Position::MiddleLeft, Side::Second);
        board.place(Position::Center, Side::Second);

        assert!(!is_draw(&board));
    }
}
