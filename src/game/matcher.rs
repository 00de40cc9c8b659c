use std::collections::BTreeSet;

use crate::constants::{BOARD_SIZE, MIN_RUN};
use crate::game::board::{Board, Pos};
use crate::game::token::Token;

/// Every cell that belongs to a maximal horizontal or vertical run of at least
/// `MIN_RUN` equal tokens. Empty slots break runs. The board is only read.
pub fn find_matches(board: &Board) -> BTreeSet<Pos> {
    let mut matches = BTreeSet::new();

    for y in 0..BOARD_SIZE {
        collect_runs(board, (0..BOARD_SIZE).map(|x| Pos::new(x, y)), &mut matches);
    }
    for x in 0..BOARD_SIZE {
        collect_runs(board, (0..BOARD_SIZE).map(|y| Pos::new(x, y)), &mut matches);
    }

    matches
}

pub fn has_match(board: &Board) -> bool {
    !find_matches(board).is_empty()
}

fn collect_runs(board: &Board, line: impl Iterator<Item = Pos>, matches: &mut BTreeSet<Pos>) {
    let mut run: Vec<Pos> = Vec::with_capacity(BOARD_SIZE);
    let mut current: Option<Token> = None;

    for pos in line {
        let token = board.token_at(pos);
        if token.is_some() && token == current {
            run.push(pos);
            continue;
        }

        close_run(&mut run, matches);
        current = token;
        if token.is_some() {
            run.push(pos);
        }
    }

    close_run(&mut run, matches);
}

fn close_run(run: &mut Vec<Pos>, matches: &mut BTreeSet<Pos>) {
    if run.len() >= MIN_RUN {
        matches.extend(run.drain(..));
    } else {
        run.clear();
    }
}
