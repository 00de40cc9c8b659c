//! Boards shared by the integration tests.
//!
//! Rows are written top to bottom; `S L H C T` are the five tokens and `.` is an
//! empty slot. The base pattern places token `(x + 2y) mod 5`, which has no run
//! and no swap that forms one.

#![allow(dead_code)]

use tcrush::config::Config;
use tcrush::game::sequencer::Timings;
use tcrush::game::Board;

pub const STUCK: [&str; 8] = [
    "SLHCTSLH", "HCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTSLH", "HCTSLHCT", "TSLHCTSL",
];

/// Two moves: swapping (0,2)-(1,2) and swapping (6,4)-(6,5).
pub const TWO_MOVES: [&str; 8] = [
    "SLHCTSLH", "SCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTTLH", "HCTSLHCT", "TSLHCTSL",
];

/// One move only, vertical: swapping (6,4)-(6,5).
pub const VERTICAL_ONLY: [&str; 8] = [
    "SLHCTSLH", "HCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTTLH", "HCTSLHCT", "TSLHCTSL",
];

/// Horizontal (0,2)-(1,2) and vertical (1,0)-(1,1): the vertical one sits in an earlier row.
pub const VERTICAL_IN_EARLIER_ROW: [&str; 8] = [
    "SLCCTSLH", "SCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTSLH", "HCTSLHCT", "TSLHCTSL",
];

/// A run of four along the top row and nothing else.
pub const RUN_OF_FOUR: [&str; 8] = [
    "HHHHTSLH", "HCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTSLH", "HCTSLHCT", "TSLHCTSL",
];

/// Clearing the bottom-left CCC drops LL next to the L at (3,7), a second run.
pub const CHAIN: [&str; 8] = [
    "SLHCTSLH", "HCTSLHCT", "TSLHCTSL", "LHCTSLHC", "CTSLHCTS", "SLHCTSLH", "HLLSLHCT", "CCCLCTSL",
];

pub fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows).expect("fixture board should parse")
}

pub fn config() -> Config {
    Config {
        seed: Some(42),
        ..Config::default()
    }
}

pub fn instant_config() -> Config {
    Config {
        seed: Some(42),
        timings: Timings::scaled(0.0),
        ..Config::default()
    }
}
