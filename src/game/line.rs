use std::fmt;

/// Contiguous, collinear cells holding the same marker. `N` is the win length
/// of the game (3 for tic-tac-toe, 4 for connect four).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine<C, const N: usize> {
    cells: [C; N],
}

impl<C: Copy + PartialEq, const N: usize> WinningLine<C, N> {
    pub fn new(cells: [C; N]) -> Self {
        WinningLine { cells }
    }

    /// Cells in the order the detector walked them.
    pub fn cells(&self) -> &[C; N] {
        &self.cells
    }

    pub fn contains(&self, cell: &C) -> bool {
        self.cells.contains(cell)
    }
}

impl<C: fmt::Display, const N: usize> fmt::Display for WinningLine<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let line = WinningLine::new([0usize, 4, 8]);
        assert!(line.contains(&4));
        assert!(!line.contains(&5));
    }

    #[test]
    fn test_display_joins_cells() {
        let line = WinningLine::new([2usize, 4, 6]);
        assert_eq!(line.to_string(), "2-4-6");
    }
}
