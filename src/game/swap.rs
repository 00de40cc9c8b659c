use tracing::debug;

use crate::error::MoveError;
use crate::game::board::{Board, Pos};
use crate::game::matcher::has_match;
use crate::game::speculate::Speculation;

/// Swaps `a` and `b` and keeps the swap only if it forms a run.
///
/// Out-of-range, non-adjacent or empty cells are rejected before anything is
/// touched. A swap that forms no run is reverted and reported as
/// [`MoveError::NoMatch`]; either way a rejection leaves `board` unchanged.
pub fn try_swap(board: &mut Board, a: Pos, b: Pos) -> Result<(), MoveError> {
    check_move(board, a, b)?;

    let speculation = Speculation::swap(board, a, b);
    if !has_match(speculation.board()) {
        debug!(%a, %b, "swap forms no run, reverting");
        return Err(MoveError::NoMatch);
    }

    speculation.commit();
    debug!(%a, %b, "swap accepted");
    Ok(())
}

/// Whether swapping `a` and `b` would form a run. `board` is restored before returning.
pub fn would_match(board: &mut Board, a: Pos, b: Pos) -> bool {
    let speculation = Speculation::swap(board, a, b);
    has_match(speculation.board())
}

fn check_move(board: &Board, a: Pos, b: Pos) -> Result<(), MoveError> {
    for pos in [a, b] {
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds(pos));
        }
    }
    if !a.is_adjacent(b) {
        return Err(MoveError::NotAdjacent(a, b));
    }
    for pos in [a, b] {
        if board.get(pos).is_none() {
            return Err(MoveError::EmptyCell(pos));
        }
    }
    Ok(())
}
