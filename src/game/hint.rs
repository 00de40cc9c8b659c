use tracing::{instrument, trace};

use crate::constants::BOARD_SIZE;
use crate::game::board::{Board, Pos};
use crate::game::swap::would_match;

/// A pair of neighbouring cells whose swap forms a run.
pub type Hint = (Pos, Pos);

/// Finds the first swap that would form a run.
///
/// Horizontal pairs are tried before vertical ones, each in row-major order,
/// so the same board always yields the same hint. Returns `None` when no
/// single swap anywhere produces a run.
#[instrument(skip(board))]
pub fn find_hint_move(board: &Board) -> Option<Hint> {
    let mut scratch = *board;

    let horizontal = (0..BOARD_SIZE).flat_map(|y| {
        (0..BOARD_SIZE - 1).map(move |x| (Pos::new(x, y), Pos::new(x + 1, y)))
    });
    let vertical = (0..BOARD_SIZE).flat_map(|x| {
        (0..BOARD_SIZE - 1).map(move |y| (Pos::new(x, y), Pos::new(x, y + 1)))
    });

    for (a, b) in horizontal.chain(vertical) {
        if scratch.get(a).is_none() || scratch.get(b).is_none() {
            continue;
        }
        if would_match(&mut scratch, a, b) {
            trace!(%a, %b, "hint found");
            return Some((a, b));
        }
    }

    trace!("no swap forms a run");
    None
}
