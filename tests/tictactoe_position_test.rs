//! Tests for tic-tac-toe positions and board queries.

use strictly_noughts::{Board, LineId, Position, Side};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_unfilled_cells_empty_board() {
    let board = Board::new();
    assert_eq!(board.unfilled_cells(), Position::ALL.to_vec());
}

#[test]
fn test_unfilled_cells_filters_filled() {
    let mut board = Board::new();
    board.place(Position::TopLeft, Side::First);
    board.place(Position::Center, Side::Second);

    let unfilled = board.unfilled_cells();
    assert_eq!(unfilled.len(), 7);
    assert!(!unfilled.contains(&Position::TopLeft));
    assert!(!unfilled.contains(&Position::Center));
    assert!(unfilled.contains(&Position::BottomRight));
}

#[test]
fn test_lines_enumerate_in_fixed_order() {
    let board = Board::new();
    let ids: Vec<_> = board.lines().map(|line| line.id().to_string()).collect();
    assert_eq!(
        ids,
        ["1-2-3", "4-5-6", "7-8-9", "3-5-7", "1-5-9", "1-4-7", "2-5-8", "3-6-9"]
    );
}

#[test]
fn test_line_unfilled_cells_in_line_order() {
    let mut board = Board::new();
    board.place(Position::Center, Side::First);
    let line = board.line(LineId::AntiDiagonal);
    assert_eq!(line.unfilled_cells(), vec![Position::TopRight, Position::BottomLeft]);
    assert_eq!(line.render(), "X");
    assert!(!line.is_won_by(Side::First));
}
