//! Rules and resolution engine for a terminal match-three puzzle, plus the
//! crossterm/ratatui front-end that plays it.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod ui;
