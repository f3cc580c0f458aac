use std::fmt;

use crate::error::InvalidMove;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

/// A player's disc colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    pub fn to_cell(self) -> Cell {
        match self {
            Disc::Red => Cell::Red,
            Disc::Yellow => Cell::Yellow,
        }
    }

    /// Get colour name for display
    pub fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell on the grid. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }

    /// Step by `(dc, dr)`, or `None` when that leaves the grid.
    pub fn offset(self, dc: isize, dr: isize) -> Option<Position> {
        let column = self.column.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        (column < COLS && row < ROWS).then_some(Position { column, row })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column, self.row)
    }
}

/// 7 columns of 6 cells, filled from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    columns: [[Cell; ROWS]; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            columns: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at `(column, row)`; off-grid reads as empty
    pub fn get(&self, column: usize, row: usize) -> Cell {
        if column >= COLS || row >= ROWS {
            return Cell::Empty;
        }
        self.columns[column][row]
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.column, pos.row)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        self.columns[column][ROWS - 1] != Cell::Empty
    }

    /// Number of discs in `column`
    pub fn height(&self, column: usize) -> usize {
        self.columns
            .get(column)
            .map_or(0, |cells| cells.iter().take_while(|&&c| c != Cell::Empty).count())
    }

    /// Copy of this board with `disc` dropped into `column`, plus where it landed.
    pub fn drop_disc(&self, column: usize, disc: Disc) -> Result<(Board, Position), InvalidMove> {
        if column >= COLS {
            return Err(InvalidMove::OutOfBounds {
                target: column,
                limit: COLS,
            });
        }
        if self.is_column_full(column) {
            return Err(InvalidMove::ColumnFull { column });
        }

        // Find the lowest empty row in this column
        let row = self.columns[column]
            .iter()
            .position(|&c| c == Cell::Empty)
            .ok_or(InvalidMove::ColumnFull { column })?;

        let mut next = *self;
        next.columns[column][row] = disc.to_cell();
        Ok((next, Position { column, row }))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|column| self.is_column_full(column))
    }

    /// True when no column has a disc above an empty cell.
    pub fn satisfies_gravity(&self) -> bool {
        self.columns.iter().all(|cells| {
            cells
                .iter()
                .skip_while(|&&c| c != Cell::Empty)
                .all(|&c| c == Cell::Empty)
        })
    }
}

impl fmt::Display for Board {
    /// Top row first, `R`/`Y`/`.` per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                let c = match self.columns[column][row] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_all(mut board: Board, moves: &[(usize, Disc)]) -> Board {
        for &(column, disc) in moves {
            board = board.drop_disc(column, disc).unwrap().0;
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for column in 0..COLS {
            for row in 0..ROWS {
                assert_eq!(board.get(column, row), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_disc() {
        let board = Board::new();

        // First disc lands on the bottom row
        let (board, pos) = board.drop_disc(3, Disc::Red).unwrap();
        assert_eq!(pos, Position::new(3, 0));
        assert_eq!(board.get(3, 0), Cell::Red);

        // Second disc stacks on top of it
        let (board, pos) = board.drop_disc(3, Disc::Yellow).unwrap();
        assert_eq!(pos, Position::new(3, 1));
        assert_eq!(board.get(3, 1), Cell::Yellow);
        assert_eq!(board.height(3), 2);
    }

    #[test]
    fn test_drop_leaves_input_untouched() {
        let board = Board::new();
        let (next, _) = board.drop_disc(0, Disc::Red).unwrap();
        assert_eq!(board, Board::new());
        assert_ne!(next, board);
    }

    #[test]
    fn test_column_full() {
        let board = drop_all(Board::new(), &[(0, Disc::Red); ROWS]);
        assert!(board.is_column_full(0));
        assert_eq!(
            board.drop_disc(0, Disc::Yellow),
            Err(InvalidMove::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        assert_eq!(
            Board::new().drop_disc(7, Disc::Red),
            Err(InvalidMove::OutOfBounds { target: 7, limit: COLS })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..COLS {
            board = drop_all(board, &[(column, Disc::Red); ROWS]);
        }
        assert!(board.is_full());
        assert!(board.satisfies_gravity());
    }

    #[test]
    fn test_position_offset() {
        let pos = Position::new(0, 5);
        assert_eq!(pos.offset(1, -1), Some(Position::new(1, 4)));
        assert_eq!(pos.offset(-1, 0), None);
        assert_eq!(pos.offset(0, 1), None);
    }

    #[test]
    fn test_display_top_row_first() {
        let board = drop_all(Board::new(), &[(0, Disc::Red), (0, Disc::Yellow)]);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[ROWS - 1], "R......");
        assert_eq!(lines[ROWS - 2], "Y......");
    }
}
