pub mod board;
pub mod cascade;
pub mod hint;
pub mod matcher;
pub mod sequencer;
pub mod snapshot;
pub mod speculate;
pub mod state;
pub mod swap;
pub mod token;

pub use board::{Board, Cell, Pos};
pub use state::{ClickOutcome, Game, GameEvent};
pub use token::Token;
