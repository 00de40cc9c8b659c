use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::game::{ClickOutcome, Game};
use crate::input::direction::{Cursor, InputDirection};
use crate::ui::cell_at;

/// What the main loop has to do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Click(ClickOutcome),
    Restart,
    Quit,
}

/// Turns a terminal event into a grid click, a cursor move, or a loop command.
/// `board_area` is where the grid was last drawn, used to map mouse clicks.
pub fn handle_event(game: &mut Game, cursor: &mut Cursor, event: &Event, board_area: Rect) -> InputAction {
    match event {
        Event::Key(key) => handle_key(game, cursor, key),
        Event::Mouse(mouse) => handle_mouse(game, cursor, mouse, board_area),
        _ => InputAction::None,
    }
}

fn handle_key(game: &mut Game, cursor: &mut Cursor, key: &KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Restart,
        KeyCode::Left => move_cursor(cursor, InputDirection::Left),
        KeyCode::Right => move_cursor(cursor, InputDirection::Right),
        KeyCode::Up => move_cursor(cursor, InputDirection::Up),
        KeyCode::Down => move_cursor(cursor, InputDirection::Down),
        KeyCode::Char(' ') | KeyCode::Enter => InputAction::Click(game.cell_clicked(cursor.pos)),
        _ => InputAction::None,
    }
}

fn move_cursor(cursor: &mut Cursor, dir: InputDirection) -> InputAction {
    cursor.step(dir);
    InputAction::None
}

fn handle_mouse(game: &mut Game, cursor: &mut Cursor, mouse: &MouseEvent, board_area: Rect) -> InputAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }

    match cell_at(board_area, mouse.column, mouse.row) {
        Some(pos) => {
            cursor.pos = pos;
            InputAction::Click(game.cell_clicked(pos))
        }
        None => InputAction::None,
    }
}
