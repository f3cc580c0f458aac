//! Win detection scoped to the last disc played.
//!
//! Only the disc just dropped can complete a new line, so the search walks
//! outward from that anchor along each axis instead of rescanning the grid.

use super::board::{Board, Cell, Position};
use crate::game::WinningLine;

pub const WIN_LENGTH: usize = 4;

pub type Line = WinningLine<Position, WIN_LENGTH>;

/// Axis directions in check order: vertical, horizontal, diagonal up-right,
/// diagonal down-right.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Four-in-a-row through `anchor`, if any.
///
/// Cells come back in axis order (bottom to top, left to right,
/// bottom-left to top-right, top-left to bottom-right). A run longer than four
/// is cut to the first four-cell window that still contains the anchor.
pub fn detect_win(board: &Board, anchor: Position) -> Option<Line> {
    let cell = board.at(anchor);
    if cell == Cell::Empty {
        return None;
    }

    AXES
        .iter()
        .find_map(|&(dc, dr)| line_through(board, anchor, cell, dc, dr))
}

fn line_through(
    board: &Board,
    anchor: Position,
    cell: Cell,
    dc: isize,
    dr: isize,
) -> Option<Line> {
    let behind = run_length(board, anchor, cell, -dc, -dr);
    let ahead = run_length(board, anchor, cell, dc, dr);
    if behind + 1 + ahead < WIN_LENGTH {
        return None;
    }

    let back = behind.min(WIN_LENGTH - 1) as isize;
    let start = anchor.offset(-dc * back, -dr * back)?;
    let mut cells = [start; WIN_LENGTH];
    for (i, slot) in cells.iter_mut().enumerate() {
        *slot = start.offset(dc * i as isize, dr * i as isize)?;
    }
    Some(WinningLine::new(cells))
}

/// Contiguous cells equal to `cell` starting one step from `from`.
fn run_length(board: &Board, from: Position, cell: Cell, dc: isize, dr: isize) -> usize {
    std::iter::successors(from.offset(dc, dr), |p| p.offset(dc, dr))
        .take_while(|&p| board.at(p) == cell)
        .count()
}
