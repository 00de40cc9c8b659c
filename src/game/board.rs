use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{BOARD_SIZE, MIN_RUN};
use crate::error::BoardError;
use crate::game::token::Token;

/// Grid coordinate: `x` is the column, `y` the row (row 0 at the top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Orthogonal neighbours only: Manhattan distance of exactly one.
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub fn is_adjacent(a: Pos, b: Pos) -> bool {
    a.is_adjacent(b)
}

/// A placed token. `x`/`y` always mirror the slot holding the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub token: Token,
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// The square grid. An empty slot only exists while a cascade is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    slots: [[Option<Cell>; BOARD_SIZE]; BOARD_SIZE], // [row][column]
}

impl Board {
    pub fn empty() -> Self {
        Self {
            slots: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Fills every slot at random without completing a run, so the board starts at rest.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let pos = Pos::new(x, y);
                let pool: Vec<Token> = Token::ALL
                    .into_iter()
                    .filter(|&token| !board.completes_run(pos, token))
                    .collect();
                let token = pool
                    .choose(rng)
                    .copied()
                    .unwrap_or(Token::ALL[0]);
                board.set(pos, Some(token));
            }
        }
        board
    }

    /// Parses one string per row; `S L H C T` name tokens and `.` marks an empty slot.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(BoardError::RowLength {
                    row: y,
                    expected: BOARD_SIZE,
                    found: symbols.len(),
                });
            }
            for (x, &symbol) in symbols.iter().enumerate() {
                let token = match symbol {
                    '.' => None,
                    _ => Some(Token::from_char(symbol).ok_or(BoardError::UnknownToken {
                        row: y,
                        column: x,
                        symbol,
                    })?),
                };
                board.set(Pos::new(x, y), token);
            }
        }
        Ok(board)
    }

    fn slot(&self, pos: Pos) -> &Option<Cell> {
        assert!(pos.in_bounds(), "cell {pos} is outside the board");
        &self.slots[pos.y][pos.x]
    }

    fn slot_mut(&mut self, pos: Pos) -> &mut Option<Cell> {
        assert!(pos.in_bounds(), "cell {pos} is outside the board");
        &mut self.slots[pos.y][pos.x]
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        *self.slot(pos)
    }

    pub fn token_at(&self, pos: Pos) -> Option<Token> {
        self.slot(pos).map(|cell| cell.token)
    }

    /// Places `token` at `pos` (or empties the slot), keeping the cell's coordinates in sync.
    pub fn set(&mut self, pos: Pos, token: Option<Token>) {
        *self.slot_mut(pos) = token.map(|token| Cell {
            token,
            x: pos.x,
            y: pos.y,
        });
    }

    pub fn take(&mut self, pos: Pos) -> Option<Cell> {
        self.slot_mut(pos).take()
    }

    /// Exchanges two slots and rewrites both cells' coordinates.
    pub fn swap(&mut self, a: Pos, b: Pos) {
        let first = self.get(a);
        let second = self.get(b);
        self.set(a, second.map(|cell| cell.token));
        self.set(b, first.map(|cell| cell.token));
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| cell.is_some())
    }

    /// Every slot in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Option<Cell>)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Pos::new(x, y)))
            .map(move |pos| (pos, self.get(pos)))
    }

    // Would `token` at `pos` finish a run with the cells already to its left or above?
    fn completes_run(&self, pos: Pos, token: Token) -> bool {
        let reach = MIN_RUN - 1;
        let left = pos.x >= reach
            && (1..=reach).all(|d| self.token_at(Pos::new(pos.x - d, pos.y)) == Some(token));
        let up = pos.y >= reach
            && (1..=reach).all(|d| self.token_at(Pos::new(pos.x, pos.y - d)) == Some(token));
        left || up
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let symbol = self
                    .token_at(Pos::new(x, y))
                    .map_or('.', Token::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
