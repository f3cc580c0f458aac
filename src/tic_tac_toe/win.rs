//! Winning line detection for tic-tac-toe.

use super::board::{Board, Cell};
use crate::game::WinningLine;

pub type Line = WinningLine<usize, 3>;

/// Every line of three, in detection order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// First line in [`WINNING_LINES`] whose three cells hold the same mark.
pub fn detect_win(board: &Board) -> Option<Line> {
    WINNING_LINES
        .iter()
        .find(|&&[a, b, c]| {
            let first = board.get(a);
            first != Cell::Empty && board.get(b) == first && board.get(c) == first
        })
        .map(|&cells| WinningLine::new(cells))
}
