pub mod direction;
pub mod handler;

pub use direction::{Cursor, InputDirection};
pub use handler::{handle_event, InputAction};
