use std::fmt::Display;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::board_widget::{connect_four_lines, tic_tac_toe_lines};
use crate::config::GameKind;
use crate::connect_four::Disc;
use crate::game::Status;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + history
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_board(frame, app, body[0]);
    render_history(frame, app, body[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, app.active(), chunks[3]);
}

/// "Winner: X", "Next player: Red" or "Draw".
pub fn status_text<M: Display, L>(status: &Status<M, L>) -> String {
    match status {
        Status::Won { winner, .. } => format!("Winner: {winner}"),
        Status::InProgress { next } => format!("Next player: {next}"),
        Status::Draw => "Draw".to_string(),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color) = match app.active() {
        GameKind::TicTacToe => {
            let session = app.tic_tac_toe();
            (status_text(&session.status()), Color::Cyan)
        }
        GameKind::ConnectFour => {
            let session = app.connect_four();
            let color = match session.status() {
                Status::Won { winner, .. } | Status::InProgress { next: winner } => {
                    match winner {
                        Disc::Red => Color::Red,
                        Disc::Yellow => Color::Yellow,
                    }
                }
                Status::Draw => Color::White,
            };
            (status_text(&session.status()), color)
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.active().title()),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.active() {
        GameKind::TicTacToe => tic_tac_toe_lines(app.tic_tac_toe(), Some(app.cell_cursor())),
        GameKind::ConnectFour => {
            connect_four_lines(app.connect_four(), Some(app.selected_column()))
        }
    };

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let labels = app.history_labels();
    let latest = labels.len().saturating_sub(1);
    let lines: Vec<Line<'_>> = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let marker = if index == app.history_cursor() { "> " } else { "  " };
            let mut style = Style::default();
            if index == app.history_cursor() {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            } else if index == latest {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Line::from(vec![Span::raw(marker), Span::styled(label, style)])
        })
        .collect();

    // Keep the cursor visible once the list outgrows the panel.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = app.history_cursor().saturating_sub(visible.saturating_sub(1));

    let history = Paragraph::new(lines)
        .scroll((scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL).title("History"));

    frame.render_widget(history, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, active: GameKind, area: Rect) {
    let line1 = match active {
        GameKind::TicTacToe => "Arrows: Move  |  Enter: Place  |  1-9: Place at cell",
        GameKind::ConnectFour => "←/→: Move  |  Enter: Drop  |  1-7: Drop in column",
    };
    let line2 = format!(
        "[/]: Select move  |  J: Jump  |  R: Restart  |  Tab: {}  |  Q: Quit",
        active.other().title()
    );

    let controls = Paragraph::new(vec![Line::from(line1), Line::from(line2)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
