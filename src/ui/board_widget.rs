//! Board renderings as styled text lines, independent of any terminal.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::connect_four::{self, ConnectFourSession, Position};
use crate::tic_tac_toe::{self, TicTacToeSession};

const WIN_STYLE: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::BOLD.union(Modifier::REVERSED));

/// 3x3 grid. The cursor cell is reversed, the previous move underlined and
/// the winning line highlighted.
pub fn tic_tac_toe_lines(session: &TicTacToeSession, cursor: Option<usize>) -> Vec<Line<'static>> {
    let board = session.board();
    let last = session.last_placement();
    let winning = session.winning_line();
    let mut lines = Vec::with_capacity(2 * tic_tac_toe::SIDE - 1);

    for row in 0..tic_tac_toe::SIDE {
        if row > 0 {
            lines.push(Line::from("───┼───┼───"));
        }
        let mut spans = Vec::with_capacity(2 * tic_tac_toe::SIDE - 1);
        for col in 0..tic_tac_toe::SIDE {
            if col > 0 {
                spans.push(Span::raw("│"));
            }
            let index = row * tic_tac_toe::SIDE + col;
            let (symbol, color) = match board.get(index) {
                tic_tac_toe::Cell::Empty => (" · ", Color::DarkGray),
                tic_tac_toe::Cell::X => (" X ", Color::Cyan),
                tic_tac_toe::Cell::O => (" O ", Color::Magenta),
            };

            let mut style = Style::default().fg(color);
            if winning.is_some_and(|line| line.contains(&index)) {
                style = WIN_STYLE;
            } else if last == Some(index) {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            if cursor == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    lines
}

/// Connect Four grid, top row first, with a column selector above and below.
pub fn connect_four_lines(
    session: &ConnectFourSession,
    selected_column: Option<usize>,
) -> Vec<Line<'static>> {
    let board = session.board();
    let last = session.last_placement();
    let winning = session.winning_line();
    let mut lines = Vec::with_capacity(connect_four::ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..connect_four::COLS {
        if selected_column == Some(col) {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in (0..connect_four::ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..connect_four::COLS {
            let pos = Position::new(col, row);
            let (symbol, color) = match board.at(pos) {
                connect_four::Cell::Empty => (" . ", Color::DarkGray),
                connect_four::Cell::Red => (" ● ", Color::Red),
                connect_four::Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            if winning.is_some_and(|line| line.contains(&pos)) {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            } else if last == Some(pos) {
                style = style.add_modifier(Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..connect_four::COLS {
        if selected_column == Some(col) {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}
