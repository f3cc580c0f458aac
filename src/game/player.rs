/// Which of the two seats is to act. Each game maps a side onto its own marker
/// (X/O, Red/Yellow) through [`Rules::marker`](super::Rules::marker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Side to act after `moves` placements: the first side moves on even
    /// counts.
    pub fn to_move_after(moves: usize) -> Side {
        if moves % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::First.other(), Side::Second);
        assert_eq!(Side::Second.other(), Side::First);
    }

    #[test]
    fn test_parity() {
        assert_eq!(Side::to_move_after(0), Side::First);
        assert_eq!(Side::to_move_after(1), Side::Second);
        assert_eq!(Side::to_move_after(8), Side::First);
    }
}
