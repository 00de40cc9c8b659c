use std::error::Error;
use std::fmt;

use crate::game::board::Pos;

/// Why a swap attempt was turned down. A rejected swap never mutates the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(Pos),
    NotAdjacent(Pos, Pos),
    EmptyCell(Pos),
    NoMatch,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(pos) => write!(f, "cell {pos} is outside the board"),
            MoveError::NotAdjacent(a, b) => write!(f, "cells {a} and {b} are not neighbours"),
            MoveError::EmptyCell(pos) => write!(f, "cell {pos} is empty"),
            MoveError::NoMatch => write!(f, "swap does not form a run"),
        }
    }
}

impl Error for MoveError {}

/// Problems with a board written out as text rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    RowCount { expected: usize, found: usize },
    RowLength { row: usize, expected: usize, found: usize },
    UnknownToken { row: usize, column: usize, symbol: char },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::RowCount { expected, found } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            BoardError::RowLength { row, expected, found } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            BoardError::UnknownToken { row, column, symbol } => {
                write!(f, "unknown token '{symbol}' at column {column}, row {row}")
            }
        }
    }
}

impl Error for BoardError {}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    AnimationScale(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AnimationScale(scale) => {
                write!(f, "animation scale must be a finite number >= 0, got {scale}")
            }
        }
    }
}

impl Error for ConfigError {}
