use crate::game::board::{Board, Pos};

/// A swap applied to a board that is undone when the guard is dropped, unless
/// [`Speculation::commit`] is called first. Swap validation and hint search both
/// go through this guard, so a rejected candidate always leaves the board as it was.
pub struct Speculation<'a> {
    board: &'a mut Board,
    a: Pos,
    b: Pos,
    committed: bool,
}

impl<'a> Speculation<'a> {
    pub fn swap(board: &'a mut Board, a: Pos, b: Pos) -> Self {
        board.swap(a, b);
        Self {
            board,
            a,
            b,
            committed: false,
        }
    }

    /// The board with the swap applied.
    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.swap(self.a, self.b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::token::Token;

    fn two_cell_board() -> Board {
        let mut board = Board::empty();
        board.set(Pos::new(0, 0), Some(Token::Smile));
        board.set(Pos::new(1, 0), Some(Token::Heart));
        board
    }

    #[test]
    fn test_dropped_speculation_restores_board() {
        let mut board = two_cell_board();
        let before = board;
        {
            let speculation = Speculation::swap(&mut board, Pos::new(0, 0), Pos::new(1, 0));
            assert_eq!(speculation.board().token_at(Pos::new(0, 0)), Some(Token::Heart));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_committed_speculation_keeps_swap() {
        let mut board = two_cell_board();
        Speculation::swap(&mut board, Pos::new(0, 0), Pos::new(1, 0)).commit();
        assert_eq!(board.token_at(Pos::new(0, 0)), Some(Token::Heart));
        assert_eq!(board.get(Pos::new(1, 0)).map(|cell| cell.pos()), Some(Pos::new(1, 0)));
    }
}
