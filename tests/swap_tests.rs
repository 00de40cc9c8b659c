//! Swap validation and speculative apply tests

mod common;

use tcrush::error::MoveError;
use tcrush::game::swap::{try_swap, would_match};
use tcrush::game::{Pos, Token};

use common::{board, STUCK, TWO_MOVES};

#[test]
fn test_swap_without_match_restores_board() {
    let mut board = board(&STUCK);
    let before = board;

    let result = try_swap(&mut board, Pos::new(0, 0), Pos::new(1, 0));

    assert_eq!(result, Err(MoveError::NoMatch));
    assert_eq!(board, before);
    for (pos, cell) in board.cells() {
        assert_eq!(cell.unwrap().pos(), pos);
    }
}

#[test]
fn test_swap_with_match_is_kept() {
    let mut board = board(&TWO_MOVES);

    let result = try_swap(&mut board, Pos::new(0, 2), Pos::new(1, 2));

    assert_eq!(result, Ok(()));
    assert_eq!(board.token_at(Pos::new(0, 2)), Some(Token::Smile));
    assert_eq!(board.token_at(Pos::new(1, 2)), Some(Token::Think));
    assert_eq!(board.get(Pos::new(0, 2)).unwrap().pos(), Pos::new(0, 2));
}

#[test]
fn test_swap_order_does_not_matter() {
    let mut board = board(&TWO_MOVES);
    assert_eq!(try_swap(&mut board, Pos::new(6, 5), Pos::new(6, 4)), Ok(()));
}

#[test]
fn test_non_adjacent_swap_is_rejected_untouched() {
    let mut board = board(&TWO_MOVES);
    let before = board;

    assert_eq!(
        try_swap(&mut board, Pos::new(0, 2), Pos::new(1, 3)),
        Err(MoveError::NotAdjacent(Pos::new(0, 2), Pos::new(1, 3)))
    );
    assert_eq!(
        try_swap(&mut board, Pos::new(0, 2), Pos::new(0, 2)),
        Err(MoveError::NotAdjacent(Pos::new(0, 2), Pos::new(0, 2)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_out_of_range_swap_is_rejected() {
    let mut board = board(&STUCK);
    let before = board;

    assert_eq!(
        try_swap(&mut board, Pos::new(7, 0), Pos::new(8, 0)),
        Err(MoveError::OutOfBounds(Pos::new(8, 0)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_swap_with_empty_slot_is_rejected() {
    let mut board = board(&STUCK);
    board.set(Pos::new(4, 4), None);
    let before = board;

    assert_eq!(
        try_swap(&mut board, Pos::new(4, 4), Pos::new(5, 4)),
        Err(MoveError::EmptyCell(Pos::new(4, 4)))
    );
    assert_eq!(board, before);
}

#[test]
fn test_would_match_leaves_board_untouched() {
    let mut board = board(&TWO_MOVES);
    let before = board;

    assert!(would_match(&mut board, Pos::new(0, 2), Pos::new(1, 2)));
    assert!(!would_match(&mut board, Pos::new(3, 3), Pos::new(4, 3)));
    assert_eq!(board, before);
}
