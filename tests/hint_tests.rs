//! Hint search tests

mod common;

use tcrush::game::hint::find_hint_move;
use tcrush::game::Pos;

use common::{board, STUCK, TWO_MOVES, VERTICAL_IN_EARLIER_ROW, VERTICAL_ONLY};

#[test]
fn test_no_hint_on_stuck_board() {
    assert_eq!(find_hint_move(&board(&STUCK)), None);
}

#[test]
fn test_horizontal_move_wins_over_vertical() {
    let board = board(&TWO_MOVES);
    for _ in 0..5 {
        assert_eq!(
            find_hint_move(&board),
            Some((Pos::new(0, 2), Pos::new(1, 2)))
        );
    }
}

#[test]
fn test_horizontal_scan_runs_before_vertical_scan() {
    // The vertical move is in row 0, the horizontal one in row 2
    let board = board(&VERTICAL_IN_EARLIER_ROW);
    assert_eq!(
        find_hint_move(&board),
        Some((Pos::new(0, 2), Pos::new(1, 2)))
    );
}

#[test]
fn test_vertical_move_found_when_alone() {
    let board = board(&VERTICAL_ONLY);
    assert_eq!(
        find_hint_move(&board),
        Some((Pos::new(6, 4), Pos::new(6, 5)))
    );
}

#[test]
fn test_hint_search_skips_empty_slots() {
    let mut board = board(&VERTICAL_ONLY);
    board.set(Pos::new(6, 4), None);
    assert_eq!(find_hint_move(&board), None);
}

#[test]
fn test_hint_search_does_not_mutate() {
    let board = board(&TWO_MOVES);
    let before = board;
    let _ = find_hint_move(&board);
    assert_eq!(board, before);
}
