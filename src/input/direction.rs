use crate::constants::BOARD_SIZE;
use crate::game::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputDirection {
    Left,
    Right,
    Up,
    Down,
}

impl InputDirection {
    pub fn delta(self) -> (isize, isize) {
        match self {
            InputDirection::Left => (-1, 0),
            InputDirection::Right => (1, 0),
            InputDirection::Up => (0, -1),
            InputDirection::Down => (0, 1),
        }
    }
}

/// Keyboard cursor over the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub pos: Pos,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            pos: Pos::new(0, 0),
        }
    }

    /// Moves one cell in `dir`, stopping at the board edge.
    pub fn step(&mut self, dir: InputDirection) {
        let (dx, dy) = dir.delta();
        let max = BOARD_SIZE as isize - 1;
        let x = (self.pos.x as isize + dx).clamp(0, max);
        let y = (self.pos.y as isize + dy).clamp(0, max);
        self.pos = Pos::new(x as usize, y as usize);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
