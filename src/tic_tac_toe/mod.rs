//! Tic-tac-toe: a 3x3 board, full-board line scan, configurable opening mark.

mod board;
mod win;

pub use board::{Board, Cell, Mark, CELLS, SIDE};
pub use win::{detect_win, Line, WINNING_LINES};

use crate::error::InvalidMove;
use crate::game::{GameSession, Rules, Side};

pub type TicTacToeSession = GameSession<TicTacToe>;

/// Tic-tac-toe rules. `first` is the mark that opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToe {
    pub first: Mark,
}

impl TicTacToe {
    pub fn new(first: Mark) -> Self {
        TicTacToe { first }
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        TicTacToe { first: Mark::O }
    }
}

impl Rules for TicTacToe {
    type Board = Board;
    type Target = usize;
    type Coord = usize;
    type Marker = Mark;
    type Line = Line;

    fn empty_board(&self) -> Board {
        Board::new()
    }

    fn marker(&self, side: Side) -> Mark {
        match side {
            Side::First => self.first,
            Side::Second => self.first.other(),
        }
    }

    fn place(
        &self,
        board: &Board,
        index: usize,
        mark: Mark,
    ) -> Result<(Board, usize), InvalidMove> {
        board.with_mark(index, mark).map(|next| (next, index))
    }

    fn detect_win(&self, board: &Board, _last: usize) -> Option<Line> {
        detect_win(board)
    }

    fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }
}
