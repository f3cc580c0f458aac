//! Connect Four: a 7x6 grid filled from the bottom, with win detection
//! anchored on the disc just dropped. Red always opens.

mod board;
mod win;

pub use board::{Board, Cell, Disc, Position, COLS, ROWS};
pub use win::{detect_win, Line, WIN_LENGTH};

use crate::error::InvalidMove;
use crate::game::{GameSession, Rules, Side};

pub type ConnectFourSession = GameSession<ConnectFour>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectFour;

impl Rules for ConnectFour {
    type Board = Board;
    type Target = usize;
    type Coord = Position;
    type Marker = Disc;
    type Line = Line;

    fn empty_board(&self) -> Board {
        Board::new()
    }

    fn marker(&self, side: Side) -> Disc {
        match side {
            Side::First => Disc::Red,
            Side::Second => Disc::Yellow,
        }
    }

    fn place(
        &self,
        board: &Board,
        column: usize,
        disc: Disc,
    ) -> Result<(Board, Position), InvalidMove> {
        board.drop_disc(column, disc)
    }

    fn detect_win(&self, board: &Board, last: Position) -> Option<Line> {
        detect_win(board, last)
    }

    fn is_full(&self, board: &Board) -> bool {
        board.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Status, WinningLine};

    fn play(mut session: ConnectFourSession, columns: &[usize]) -> ConnectFourSession {
        for &column in columns {
            session = session.play_move(column).unwrap();
        }
        session
    }

    #[test]
    fn test_initial_session() {
        let session = ConnectFourSession::default();
        assert_eq!(session.next_player(), Disc::Red);
        assert_eq!(session.board(), &Board::new());
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_apply_move() {
        let session = play(ConnectFourSession::default(), &[3]);
        assert_eq!(session.next_player(), Disc::Yellow);
        assert_eq!(session.board().get(3, 0), Cell::Red);
        assert_eq!(session.last_placement(), Some(Position::new(3, 0)));
    }

    #[test]
    fn test_horizontal_win_along_bottom_row() {
        let session = play(ConnectFourSession::default(), &[0, 6, 1, 6, 2, 6, 3]);
        let expected = WinningLine::new([
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 0),
        ]);
        assert_eq!(session.winning_line(), Some(&expected));
        assert_eq!(
            session.status(),
            Status::Won {
                winner: Disc::Red,
                line: expected,
            }
        );
    }

    #[test]
    fn test_full_column_rejected() {
        let session = play(ConnectFourSession::default(), &[0; ROWS]);
        assert!(session.winning_line().is_none());
        assert_eq!(session.history().len(), ROWS + 1);
        assert_eq!(
            session.play_move(0),
            Err(InvalidMove::ColumnFull { column: 0 })
        );
        assert_eq!(session.history().len(), ROWS + 1);
    }

    #[test]
    fn test_every_entry_obeys_gravity() {
        let session = play(ConnectFourSession::default(), &[3, 3, 4, 2, 2, 5, 6, 0, 1]);
        assert!(session
            .history()
            .entries()
            .iter()
            .all(|entry| entry.board.satisfies_gravity()));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let columns = [
            3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 4, 4, 4, 4, 4, 4, 0, 1, 1, 1, 1, 1, 1, 5, 5, 5, 5,
            5, 5, 0, 0, 0, 0, 0, 6, 6, 6, 6, 6, 6,
        ];
        let session = play(ConnectFourSession::default(), &columns);
        assert_eq!(session.history().moves(), ROWS * COLS);
        assert!(session.board().is_full());
        assert_eq!(session.winning_line(), None);
        assert!(session.is_draw());
        assert!(session.is_terminal());
        assert_eq!(session.status(), Status::Draw);
        assert_eq!(
            session.play_move(3),
            Err(InvalidMove::ColumnFull { column: 3 })
        );
    }

    #[test]
    fn test_yellow_wins() {
        // Red scatters, yellow stacks column 1.
        let session = play(ConnectFourSession::default(), &[0, 1, 2, 1, 4, 1, 6, 1]);
        assert_eq!(session.winner(), Some(Disc::Yellow));
        assert_eq!(session.play_move(5), Err(InvalidMove::GameOver));
    }
}
