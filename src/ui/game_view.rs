use super::board_widget::{cell_span, piece_color};
use crate::game::{Board, Game, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONTROLS_HELP: &str =
    "←/→: Move  |  1-9: Drop in column  |  Enter: Drop  |  R: Restart  |  Q: Quit";

pub fn render(frame: &mut Frame, game: &Game, selected_column: usize, message: &Option<String>) {
    let board_height = game.board().height() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            (
                format!("Current Player: {}", player.display_name()),
                piece_color(player.display_color()),
            )
        }
        GameStatus::Won(player) => (
            "Game Over".to_string(),
            piece_color(player.display_color()),
        ),
        GameStatus::Tied => ("Game Over".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Game, selected_column: usize, area: Rect) {
    let board = game.board();
    let width = board.width();
    let winning = game.winning_run();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        col_line.push(Span::styled(label, column_label_style(board, col, selected_column)));
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let highlighted = winning.is_some_and(|run| run.contains(&(row, col)));
            row_spans.push(cell_span(board.get(row, col), highlighted));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && !game.is_terminal() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

/// Selected column is highlighted; full columns are dimmed.
fn column_label_style(board: &Board, col: usize, selected_column: usize) -> Style {
    let style = if board.is_column_full(col) {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    if col == selected_column {
        style
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(CONTROLS_HELP)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
