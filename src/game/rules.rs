use std::fmt::Debug;

use super::Side;
use crate::error::InvalidMove;

/// The per-game half of a session: how a move lands on the board and what
/// counts as a win. Boards are small `Copy` values so every placement yields a
/// fresh snapshot and leaves its input untouched.
pub trait Rules: Clone + Debug + PartialEq {
    type Board: Copy + Debug + PartialEq;
    /// What the player chooses: a cell for tic-tac-toe, a column for connect four.
    type Target: Copy + Debug;
    /// Where a piece actually landed.
    type Coord: Copy + Debug + PartialEq;
    type Marker: Copy + Debug + PartialEq;
    type Line: Copy + Debug + PartialEq;

    fn empty_board(&self) -> Self::Board;

    /// Marker placed by `side`.
    fn marker(&self, side: Side) -> Self::Marker;

    /// Place `marker` at `target`, returning the new board and the landing
    /// coordinate.
    fn place(
        &self,
        board: &Self::Board,
        target: Self::Target,
        marker: Self::Marker,
    ) -> Result<(Self::Board, Self::Coord), InvalidMove>;

    /// Winning line on `board`, if any. `last` is the most recent placement;
    /// games that scan the whole board may ignore it.
    fn detect_win(&self, board: &Self::Board, last: Self::Coord) -> Option<Self::Line>;

    fn is_full(&self, board: &Self::Board) -> bool;
}
