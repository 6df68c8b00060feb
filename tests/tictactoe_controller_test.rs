//! Tests for the game controller state machine.

use strictly_noughts::{
    GameController, GameStatus, HeuristicOpponent, LineId, MoveError, MoveOutcome, Opponent,
    Position, Scores, Side,
};

fn pos(n: u8) -> Position {
    Position::from_number(n).expect("position 1-9")
}

/// Plays alternating moves starting with the side to move.
fn play(game: &mut GameController, numbers: &[u8]) {
    for &n in numbers {
        let side = game.current_side();
        game.submit_move(pos(n), side).expect("legal move");
    }
}

/// Every permutation of `items`.
fn permutations(items: &[u8]) -> Vec<Vec<u8>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_first_wins_top_row() {
    let mut game = GameController::default();
    play(&mut game, &[1, 4, 2, 5, 3]);

    assert_eq!(game.status(), GameStatus::Won(Side::First));
    assert_eq!(game.score(Side::First), 1);
    assert_eq!(game.status().message(), "X wins! Click the board to reset");
}

#[test]
fn test_second_wins() {
    let mut game = GameController::default();
    play(&mut game, &[1, 4, 2, 5, 7, 6]);

    assert_eq!(game.status(), GameStatus::Won(Side::Second));
    assert_eq!(game.status().message(), "O wins! Click the board to reset");
}

#[test]
fn test_any_line_wins_for_either_side() {
    for line in LineId::ALL {
        let own: Vec<u8> = line.positions().iter().map(|p| p.number()).collect();
        let others: Vec<u8> = (1..=9).filter(|n| !own.contains(n)).collect();

        // First completes the line on its third move
        let mut game = GameController::default();
        play(&mut game, &[own[0], others[0], own[1], others[1], own[2]]);
        assert_eq!(game.status(), GameStatus::Won(Side::First), "{line}");
        assert_eq!(game.scores(), Scores { first: 1, second: 0 }, "{line}");
        assert_eq!(game.highlighted_lines(), &[line]);

        // Second completes it while First scatters three non-line marks
        let first_moves = pick_non_line(&others);
        let mut game = GameController::default();
        play(
            &mut game,
            &[first_moves[0], own[0], first_moves[1], own[1], first_moves[2], own[2]],
        );
        assert_eq!(game.status(), GameStatus::Won(Side::Second), "{line}");
        assert_eq!(game.scores(), Scores { first: 0, second: 1 }, "{line}");
    }
}

/// Three of `cells` that do not form a line.
fn pick_non_line(cells: &[u8]) -> Vec<u8> {
    for a in 0..cells.len() {
        for b in a + 1..cells.len() {
            for c in b + 1..cells.len() {
                let trio = [cells[a], cells[b], cells[c]];
                let is_line = LineId::ALL.iter().any(|l| {
                    l.positions().iter().all(|p| trio.contains(&p.number()))
                });
                if !is_line {
                    return trio.to_vec();
                }
            }
        }
    }
    unreachable!("six cells always contain a non-line trio")
}

#[test]
fn test_two_lines_at_once_count_once() {
    let mut game = GameController::default();
    play(&mut game, &[1, 2, 3, 6, 9, 8, 7, 4, 5]);

    assert_eq!(game.status(), GameStatus::Won(Side::First));
    assert_eq!(game.score(Side::First), 1);
    assert_eq!(game.score(Side::Second), 0);
    assert_eq!(
        game.highlighted_lines(),
        &[LineId::AntiDiagonal, LineId::MainDiagonal]
    );
    assert_eq!(game.current_side(), Side::First);
}

#[test]
fn test_tie() {
    let mut game = GameController::default();
    play(&mut game, &[1, 4, 2, 5, 6, 3, 9, 8, 7]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().message(), "Draw, click the board to reset");
    assert_eq!(game.turn_count(), 9);
    assert_eq!(game.scores(), Scores::default());
}

#[test]
fn test_every_ordering_of_a_drawn_board_draws() {
    // Final board: X X O / O O X / X O X
    let x_cells = [1, 2, 6, 7, 9];
    let o_cells = [3, 4, 5, 8];

    let x_orders = permutations(&x_cells);
    let o_orders = permutations(&o_cells);
    let mut game = GameController::default();
    for xs in &x_orders {
        for os in o_orders.iter().step_by(5) {
            let mut moves = Vec::with_capacity(9);
            for i in 0..5 {
                moves.push(xs[i]);
                if i < 4 {
                    moves.push(os[i]);
                }
            }
            play(&mut game, &moves);
            assert_eq!(game.status(), GameStatus::Draw, "{moves:?}");
            assert_eq!(game.turn_count(), 9);
            assert_eq!(game.scores(), Scores::default());
            game.reset();
        }
    }
}

#[test]
fn test_new_game_after_win() {
    let mut game = GameController::default();
    play(&mut game, &[1, 2, 3, 6, 9, 8, 7, 4, 5]);
    assert_eq!(game.status(), GameStatus::Won(Side::First));

    let outcome = game.submit_move(pos(1), Side::First).unwrap();

    assert_eq!(outcome, MoveOutcome::Reset);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.status().message(), "");
    assert_eq!(game.board().unfilled_cells().len(), 9);
    assert_eq!(game.score(Side::First), 1);
}

#[test]
fn test_reset_at_any_point_keeps_scores() {
    let moves = [1, 4, 2, 5, 3];
    let mut game = GameController::default();
    play(&mut game, &moves);
    let scores = game.scores();

    for prefix in 0..=moves.len() {
        play(&mut game, &moves[..prefix]);
        game.reset();
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_side(), Side::First);
        assert!(game.board().cells().iter().all(|cell| !cell.filled()));
        assert!(game.highlighted_lines().is_empty());
    }
    // The full prefix wins once more
    assert_eq!(game.score(Side::First), scores.first + 1);
    assert_eq!(game.score(Side::Second), scores.second);
}

#[test]
fn test_filled_cell_changes_nothing() {
    let mut game = GameController::default();
    play(&mut game, &[5, 1]);
    let before = game.snapshot();

    for n in [5, 1] {
        assert_eq!(
            game.submit_move(pos(n), Side::First),
            Err(MoveError::CellFilled(pos(n)))
        );
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_spamming_moves_before_reply() {
    let mut game = GameController::default();
    let mut ai = HeuristicOpponent::seeded(21);
    for _ in 0..100 {
        let position = ai.select_move(game.board(), Side::First).unwrap();
        let _ = game.submit_move(position, Side::First);
    }
    let position = ai.select_move(game.board(), Side::Second).unwrap();
    game.submit_move(position, Side::Second).unwrap();

    assert_eq!(game.turn_count(), 2);
}

#[test]
fn test_second_side_can_open() {
    let mut game = GameController::new(Side::Second);
    assert_eq!(
        game.submit_move(pos(5), Side::First),
        Err(MoveError::WrongSide(Side::First))
    );
    game.submit_move(pos(5), Side::Second).unwrap();
    game.reset();
    assert_eq!(game.current_side(), Side::Second);
}
