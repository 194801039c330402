use crate::game::{Cell, PieceColor};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Terminal colour for a player's pieces.
pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Blue => Color::Blue,
    }
}

/// Three-column span for one board cell; `highlighted` marks a winning piece.
pub fn cell_span(cell: Cell, highlighted: bool) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            let mut style = Style::default().fg(piece_color(player.display_color()));
            if highlighted {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            Span::styled(" \u{25cf} ", style)
        }
    }
}
