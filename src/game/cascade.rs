use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

use crate::constants::{BOARD_SIZE, POINTS_PER_CELL};
use crate::game::board::{Board, Pos};
use crate::game::matcher::find_matches;
use crate::game::token::Token;

/// One observable change made while resolving a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    /// A matched cell was removed (fade-out).
    Cleared { pos: Pos, token: Token },
    /// A surviving cell dropped down its column.
    Fell { from: Pos, to: Pos, token: Token },
    /// A new cell was spawned into an empty slot (fade-in).
    Spawned { pos: Pos, token: Token },
}

impl CascadeEvent {
    /// Replays the change on `board`. Events applied in the order they were
    /// produced rebuild the board state the resolver saw.
    pub fn apply(&self, board: &mut Board) {
        match *self {
            CascadeEvent::Cleared { pos, .. } => {
                board.take(pos);
            }
            CascadeEvent::Fell { from, to, token } => {
                board.take(from);
                board.set(to, Some(token));
            }
            CascadeEvent::Spawned { pos, token } => board.set(pos, Some(token)),
        }
    }
}

/// One remove/collapse/refill iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Wave {
    pub points: u32,
    pub cleared: Vec<CascadeEvent>,
    pub falls: Vec<CascadeEvent>,
    pub spawns: Vec<CascadeEvent>,
}

impl Wave {
    pub fn cleared_cells(&self) -> BTreeSet<Pos> {
        self.cleared
            .iter()
            .filter_map(|event| match event {
                CascadeEvent::Cleared { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cascade {
    pub score_delta: u32,
    pub waves: Vec<Wave>,
}

impl Cascade {
    /// All events of all waves, in the order they happened.
    pub fn events(&self) -> impl Iterator<Item = &CascadeEvent> {
        self.waves
            .iter()
            .flat_map(|wave| wave.cleared.iter().chain(&wave.falls).chain(&wave.spawns))
    }
}

/// Removes runs, collapses columns and refills until the board holds no run.
///
/// Every iteration removes at least one run, and stops as soon as the matcher
/// finds nothing, leaving the board full and at rest.
#[instrument(skip(board, rng))]
pub fn resolve<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Cascade {
    let mut cascade = Cascade::default();

    loop {
        let matches = find_matches(board);
        if matches.is_empty() {
            break;
        }

        let points = POINTS_PER_CELL * matches.len() as u32;
        let cleared = matches
            .iter()
            .filter_map(|&pos| {
                board
                    .take(pos)
                    .map(|cell| CascadeEvent::Cleared { pos, token: cell.token })
            })
            .collect();
        let falls = collapse(board);
        let spawns = refill(board, rng);

        debug!(
            wave = cascade.waves.len() + 1,
            cleared = matches.len(),
            points,
            "cascade wave resolved"
        );

        cascade.score_delta += points;
        cascade.waves.push(Wave {
            points,
            cleared,
            falls,
            spawns,
        });
    }

    cascade
}

/// Drops every cell down its column past the empty slots beneath it. Cells keep
/// their relative order; the empty slots end up at the top of each column.
pub fn collapse(board: &mut Board) -> Vec<CascadeEvent> {
    let mut falls = Vec::new();

    for x in 0..BOARD_SIZE {
        let mut empty_below = 0;
        for y in (0..BOARD_SIZE).rev() {
            let from = Pos::new(x, y);
            match board.get(from) {
                None => empty_below += 1,
                Some(cell) if empty_below > 0 => {
                    let to = Pos::new(x, y + empty_below);
                    board.take(from);
                    board.set(to, Some(cell.token));
                    falls.push(CascadeEvent::Fell {
                        from,
                        to,
                        token: cell.token,
                    });
                }
                Some(_) => {}
            }
        }
    }

    falls
}

/// Spawns a token into every empty slot, column by column from the top down.
///
/// Each new token avoids the tokens of the neighbours already in place: the
/// cell just spawned above it and the filled cells to its left and right. Slots
/// still waiting for their token are not looked at, so a new run can still
/// appear; the resolver loop catches it on the next iteration.
pub fn refill<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Vec<CascadeEvent> {
    let mut spawns = Vec::new();

    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let pos = Pos::new(x, y);
            if board.get(pos).is_some() {
                continue;
            }

            let mut neighbours = Vec::with_capacity(3);
            if y > 0 {
                neighbours.extend(board.token_at(Pos::new(x, y - 1)));
            }
            if x > 0 {
                neighbours.extend(board.token_at(Pos::new(x - 1, y)));
            }
            if x + 1 < BOARD_SIZE {
                neighbours.extend(board.token_at(Pos::new(x + 1, y)));
            }

            let token = spawn_pool(&neighbours)
                .choose(rng)
                .copied()
                .unwrap_or(Token::ALL[0]);
            board.set(pos, Some(token));
            spawns.push(CascadeEvent::Spawned { pos, token });
        }
    }

    spawns
}

fn spawn_pool(excluded: &[Token]) -> Vec<Token> {
    let pool: Vec<Token> = Token::ALL
        .into_iter()
        .filter(|token| !excluded.contains(token))
        .collect();
    if pool.is_empty() {
        Token::ALL.to_vec()
    } else {
        pool
    }
}
