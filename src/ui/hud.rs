use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line status bar under the play area.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let value = Style::default().fg(theme.hud_accent);
    let label = Style::default().fg(theme.hud_text);
    let board = state.board();

    let line = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled("  Apples: ", label),
        Span::styled(state.apples_eaten.to_string(), value),
        Span::styled("  Tick: ", label),
        Span::styled(format!("{}ms", state.interval_ms()), value),
        Span::styled("  Board: ", label),
        Span::styled(format!("{}x{}", board.cols, board.rows), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        area,
    );
}
