use std::fmt;

use crate::error::InvalidMove;

pub const CELLS: usize = 9;
pub const SIDE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 3x3 board, cells indexed 0-8 row-major from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from a 9-character pattern of `X`, `O` and `.`.
    /// Any other character reads as empty.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut board = Board::new();
        for (cell, c) in board.cells.iter_mut().zip(pattern.chars()) {
            *cell = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                _ => Cell::Empty,
            };
        }
        board
    }

    /// Get the cell at `index`; out-of-range reads as empty
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::Empty)
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Copy of this board with `mark` at `index`.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, InvalidMove> {
        if index >= CELLS {
            return Err(InvalidMove::OutOfBounds {
                target: index,
                limit: CELLS,
            });
        }
        if self.cells[index] != Cell::Empty {
            return Err(InvalidMove::CellOccupied { index });
        }

        let mut next = *self;
        next.cells[index] = mark.to_cell();
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELLS).all(|i| board.get(i) == Cell::Empty));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_with_mark_copies() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Cell::Empty);
        assert_eq!(next.get(4), Cell::X);
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let board = Board::new().with_mark(0, Mark::O).unwrap();
        assert_eq!(
            board.with_mark(0, Mark::X),
            Err(InvalidMove::CellOccupied { index: 0 })
        );
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            Board::new().with_mark(9, Mark::X),
            Err(InvalidMove::OutOfBounds { target: 9, limit: 9 })
        );
    }

    #[test]
    fn test_from_pattern_and_display() {
        let board = Board::from_pattern("XO.");
        assert_eq!(board.get(0), Cell::X);
        assert_eq!(board.get(1), Cell::O);
        assert_eq!(board.to_string(), "XO.\n...\n...\n");
    }

    #[test]
    fn test_full_board() {
        assert!(Board::from_pattern("XOXXOOOXX").is_full());
        assert!(!Board::from_pattern("XOXXOOOX.").is_full());
    }
}
