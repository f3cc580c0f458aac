use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, warn};

use crate::config::{AppConfig, GameKind};
use crate::connect_four::{ConnectFourSession, COLS};
use crate::error::InvalidMove;
use crate::tic_tac_toe::{TicTacToe, TicTacToeSession, CELLS, SIDE};

/// Terminal front end. Holds one independent session per game and shows
/// whichever is active; switching games never touches either session.
pub struct App {
    tic_tac_toe: TicTacToeSession,
    connect_four: ConnectFourSession,
    active: GameKind,
    cell_cursor: usize,
    selected_column: usize,
    history_cursor: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            tic_tac_toe: TicTacToeSession::new(TicTacToe::new(config.tic_tac_toe.first_mark)),
            connect_four: ConnectFourSession::default(),
            active: config.ui.starting_game,
            cell_cursor: CELLS / 2,
            selected_column: COLS / 2,
            history_cursor: 0,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub(super) fn tic_tac_toe(&self) -> &TicTacToeSession {
        &self.tic_tac_toe
    }

    pub(super) fn connect_four(&self) -> &ConnectFourSession {
        &self.connect_four
    }

    pub(super) fn active(&self) -> GameKind {
        self.active
    }

    pub(super) fn cell_cursor(&self) -> usize {
        self.cell_cursor
    }

    pub(super) fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub(super) fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub(super) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(super) fn history_labels(&self) -> Vec<String> {
        match self.active {
            GameKind::TicTacToe => self.tic_tac_toe.history_labels(),
            GameKind::ConnectFour => self.connect_four.history_labels(),
        }
    }

    fn latest_index(&self) -> usize {
        match self.active {
            GameKind::TicTacToe => self.tic_tac_toe.history().latest_index(),
            GameKind::ConnectFour => self.connect_four.history().latest_index(),
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.active = self.active.other();
                self.history_cursor = self.latest_index();
                debug!(game = ?self.active, "switched game");
            }
            KeyCode::Left => self.move_cursor(-1, 0),
            KeyCode::Right => self.move_cursor(1, 0),
            KeyCode::Up => self.move_cursor(0, -1),
            KeyCode::Down => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let target = match self.active {
                    GameKind::TicTacToe => self.cell_cursor,
                    GameKind::ConnectFour => self.selected_column,
                };
                self.play(target);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let target = c as usize - '1' as usize;
                match self.active {
                    GameKind::TicTacToe => self.cell_cursor = target,
                    GameKind::ConnectFour if target < COLS => self.selected_column = target,
                    GameKind::ConnectFour => {}
                }
                self.play(target);
            }
            KeyCode::Char('[') => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
            }
            KeyCode::Char(']') => {
                self.history_cursor = (self.history_cursor + 1).min(self.latest_index());
            }
            KeyCode::Char('j') => self.jump(),
            KeyCode::Char('r') => {
                match self.active {
                    GameKind::TicTacToe => self.tic_tac_toe = self.tic_tac_toe.reset(),
                    GameKind::ConnectFour => self.connect_four = self.connect_four.reset(),
                }
                self.history_cursor = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        match self.active {
            GameKind::TicTacToe => {
                let row = (self.cell_cursor / SIDE).saturating_add_signed(dy).min(SIDE - 1);
                let col = (self.cell_cursor % SIDE).saturating_add_signed(dx).min(SIDE - 1);
                self.cell_cursor = row * SIDE + col;
            }
            GameKind::ConnectFour => {
                self.selected_column = self
                    .selected_column
                    .saturating_add_signed(dx)
                    .min(COLS - 1);
            }
        }
    }

    fn play(&mut self, target: usize) {
        let outcome = match self.active {
            GameKind::TicTacToe => self.tic_tac_toe.play_move(target).map(|next| {
                self.tic_tac_toe = next;
            }),
            GameKind::ConnectFour => self.connect_four.play_move(target).map(|next| {
                self.connect_four = next;
            }),
        };

        match outcome {
            Ok(()) => {
                self.history_cursor = self.latest_index();
                self.message = self.outcome_message();
            }
            Err(err) => self.message = Some(rejection_message(err)),
        }
    }

    fn jump(&mut self) {
        let index = self.history_cursor;
        let jumped = match self.active {
            GameKind::TicTacToe => self.tic_tac_toe.jump_to(index).map(|next| {
                self.tic_tac_toe = next;
            }),
            GameKind::ConnectFour => self.connect_four.jump_to(index).map(|next| {
                self.connect_four = next;
            }),
        };

        match jumped {
            Ok(()) => {
                self.message = Some(crate::game::move_label(index).replacen("Go to", "Back at", 1));
            }
            Err(err) => {
                warn!(%err, "history cursor out of step with session");
                self.history_cursor = self.latest_index();
                self.message = Some(err.to_string());
            }
        }
    }

    fn outcome_message(&self) -> Option<String> {
        match self.active {
            GameKind::TicTacToe => {
                let session = &self.tic_tac_toe;
                if let Some(winner) = session.winner() {
                    Some(format!("{winner} wins!"))
                } else if session.is_draw() {
                    Some("It's a draw!".to_string())
                } else {
                    None
                }
            }
            GameKind::ConnectFour => {
                let session = &self.connect_four;
                if let Some(winner) = session.winner() {
                    Some(format!("{winner} wins!"))
                } else if session.is_draw() {
                    Some("It's a draw!".to_string())
                } else {
                    None
                }
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

fn rejection_message(err: InvalidMove) -> String {
    match err {
        InvalidMove::CellOccupied { .. } => "That square is taken!".to_string(),
        InvalidMove::ColumnFull { .. } => "Column is full!".to_string(),
        InvalidMove::OutOfBounds { .. } => "Invalid position!".to_string(),
        InvalidMove::GameOver => "Game over! Press 'r' to restart.".to_string(),
    }
}
