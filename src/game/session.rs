use tracing::{debug, info, instrument};

use super::{History, HistoryEntry, Rules, Side};
use crate::error::{HistoryError, InvalidMove};

/// Where a game stands, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<M, L> {
    InProgress { next: M },
    Won { winner: M, line: L },
    Draw,
}

/// A game in progress: rules, snapshots of every position so far, and the
/// winning line of the latest position if there is one.
///
/// Sessions are values. Every command borrows `self` and returns a new
/// session, so a refused command simply leaves the caller with the one it
/// already had.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession<R: Rules> {
    rules: R,
    history: History<R::Board, R::Coord>,
    winning_line: Option<R::Line>,
}

impl<R: Rules> GameSession<R> {
    /// Create a session holding only the empty board
    pub fn new(rules: R) -> Self {
        let history = History::new(rules.empty_board());
        GameSession {
            rules,
            history,
            winning_line: None,
        }
    }

    /// Discard all history and start over with the same rules
    pub fn reset(&self) -> Self {
        debug!("session reset");
        Self::new(self.rules.clone())
    }

    /// Place the next player's marker at `target`.
    ///
    /// Refused with [`InvalidMove::GameOver`] while a winning line stands,
    /// otherwise with whatever the rules reject.
    #[instrument(skip(self), fields(moves = self.history.moves()))]
    pub fn play_move(&self, target: R::Target) -> Result<Self, InvalidMove> {
        if self.winning_line.is_some() {
            debug!("move refused: game already won");
            return Err(InvalidMove::GameOver);
        }

        let side = self.next_side();
        let marker = self.rules.marker(side);
        let (board, placed) = self
            .rules
            .place(self.board(), target, marker)
            .inspect_err(|err| debug!(%err, "move refused"))?;

        let winning_line = self.rules.detect_win(&board, placed);
        let history = self.history.append(HistoryEntry {
            board,
            placed: Some(placed),
        });

        match &winning_line {
            Some(line) => info!(?marker, ?line, "game won"),
            None if self.rules.is_full(&board) => info!("game drawn"),
            None => debug!(?marker, ?placed, "move accepted"),
        }

        Ok(GameSession {
            rules: self.rules.clone(),
            history,
            winning_line,
        })
    }

    /// Rewind to history entry `index`, dropping every later entry.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, index: usize) -> Result<Self, HistoryError> {
        let history = self.history.truncate(index)?;
        // A win can only stand on the latest entry.
        let winning_line = if index == self.history.latest_index() {
            self.winning_line
        } else {
            None
        };
        debug!(moves = history.moves(), "jumped");

        Ok(GameSession {
            rules: self.rules.clone(),
            history,
            winning_line,
        })
    }

    pub fn history(&self) -> &History<R::Board, R::Coord> {
        &self.history
    }

    /// The latest board
    pub fn board(&self) -> &R::Board {
        &self.history.latest().board
    }

    pub fn winning_line(&self) -> Option<&R::Line> {
        self.winning_line.as_ref()
    }

    /// Where the latest piece landed; `None` at game start
    pub fn last_placement(&self) -> Option<R::Coord> {
        self.history.latest().placed
    }

    pub fn next_side(&self) -> Side {
        Side::to_move_after(self.history.moves())
    }

    pub fn next_player(&self) -> R::Marker {
        self.rules.marker(self.next_side())
    }

    /// Marker of the side that completed the winning line
    pub fn winner(&self) -> Option<R::Marker> {
        self.winning_line
            .map(|_| self.rules.marker(self.next_side().other()))
    }

    pub fn is_draw(&self) -> bool {
        self.winning_line.is_none() && self.rules.is_full(self.board())
    }

    pub fn is_terminal(&self) -> bool {
        self.winning_line.is_some() || self.is_draw()
    }

    pub fn status(&self) -> Status<R::Marker, R::Line> {
        match (self.winning_line, self.winner()) {
            (Some(line), Some(winner)) => Status::Won { winner, line },
            _ if self.is_draw() => Status::Draw,
            _ => Status::InProgress {
                next: self.next_player(),
            },
        }
    }

    pub fn history_labels(&self) -> Vec<String> {
        self.history.labels()
    }
}

impl<R: Rules + Default> Default for GameSession<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect_four::{Board, ConnectFourSession, Disc, Position};
    use crate::tic_tac_toe::{Mark, TicTacToeSession};

    fn play_c4(columns: &[usize]) -> ConnectFourSession {
        let mut session = ConnectFourSession::default();
        for &column in columns {
            session = session.play_move(column).unwrap();
        }
        session
    }

    #[test]
    fn test_play_move_leaves_prior_session_unchanged() {
        let session = play_c4(&[3]);
        let snapshot = session.clone();
        let next = session.play_move(3).unwrap();
        assert_eq!(session, snapshot);
        assert_eq!(next.history().len(), session.history().len() + 1);
    }

    #[test]
    fn test_entries_differ_by_one_placement() {
        let session = play_c4(&[3, 3, 2, 4, 0]);
        for pair in session.history().entries().windows(2) {
            let changed = (0..crate::connect_four::COLS)
                .flat_map(|c| (0..crate::connect_four::ROWS).map(move |r| (c, r)))
                .filter(|&(c, r)| pair[0].board.get(c, r) != pair[1].board.get(c, r))
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_vertical_win_recorded() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        let cells = session.winning_line().unwrap().cells().to_vec();
        assert_eq!(
            cells,
            vec![
                Position::new(3, 0),
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );
        assert_eq!(session.winner(), Some(Disc::Red));
        assert!(session.is_terminal());
    }

    #[test]
    fn test_every_target_refused_after_win() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        for column in 0..=crate::connect_four::COLS {
            assert_eq!(session.play_move(column), Err(InvalidMove::GameOver));
        }
    }

    #[test]
    fn test_jump_to_start() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        let start = session.jump_to(0).unwrap();
        assert_eq!(start.board(), &Board::new());
        assert_eq!(start.next_player(), Disc::Red);
        assert_eq!(start.winning_line(), None);
        assert_eq!(start.history().len(), 1);
    }

    #[test]
    fn test_jump_to_latest_keeps_win() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        let latest = session.history().latest_index();
        let same = session.jump_to(latest).unwrap();
        assert_eq!(same, session);
    }

    #[test]
    fn test_jump_before_win_allows_play() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        let rewound = session.jump_to(6).unwrap();
        assert_eq!(rewound.winning_line(), None);
        assert_eq!(rewound.next_player(), Disc::Red);
        // Red takes a different line this time.
        let next = rewound.play_move(4).unwrap();
        assert_eq!(next.winning_line(), None);
        assert_eq!(next.next_player(), Disc::Yellow);
    }

    #[test]
    fn test_jump_out_of_range() {
        let session = play_c4(&[3, 4]);
        assert_eq!(
            session.jump_to(3),
            Err(HistoryError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_turn_follows_truncated_length() {
        let session = [0, 1, 3]
            .into_iter()
            .fold(TicTacToeSession::default(), |s, m| s.play_move(m).unwrap());
        assert_eq!(session.next_player(), Mark::X);
        assert_eq!(session.jump_to(2).unwrap().next_player(), Mark::O);
        assert_eq!(session.jump_to(1).unwrap().next_player(), Mark::X);
    }

    #[test]
    fn test_reset() {
        let session = play_c4(&[3, 0, 3, 0, 3, 0, 3]);
        let fresh = session.reset();
        assert_eq!(fresh, ConnectFourSession::default());
        assert_eq!(fresh.history_labels(), vec!["Go to game start"]);
        assert_eq!(fresh.status(), Status::InProgress { next: Disc::Red });
    }
}
