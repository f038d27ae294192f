use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::game::{GamePhase, GameState, Snapshot};
use crate::grid::{Board, Cell};
use crate::input::Direction;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders one full frame from immutable state.
///
/// `paused` is scheduler-side: pausing stops the timer without touching
/// game state, so the engine has no phase for it.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme, paused: bool) {
    let [play_outer, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    let play_area = board_area(play_outer, state.board());
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    let snapshot = state.snapshot();
    render_food(frame, inner, state.board(), &snapshot, theme);
    render_snake(frame, inner, state.board(), &snapshot, state.direction(), theme);

    render_hud(frame, hud_area, state, theme);

    match state.phase() {
        GamePhase::Idle => render_start_menu(frame, play_area, theme),
        GamePhase::GameOver => {
            render_game_over_menu(frame, play_area, snapshot.score, state.death_reason(), theme);
        }
        GamePhase::BoardFull => render_victory_menu(frame, play_area, snapshot.score, theme),
        GamePhase::Running if paused => render_pause_menu(frame, play_area, theme),
        GamePhase::Running => {}
    }
}

/// Centers a `cols+2 x rows+2` bordered field in the available area,
/// clipping when the terminal is smaller than the board.
fn board_area(available: Rect, board: Board) -> Rect {
    let want_width = board.cols.saturating_add(2).min(available.width);
    let want_height = board.rows.saturating_add(2).min(available.height);

    Rect {
        x: available.x + (available.width - want_width) / 2,
        y: available.y + (available.height - want_height) / 2,
        width: want_width,
        height: want_height,
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    inner: Rect,
    board: Board,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let Some((x, y)) = cell_to_terminal(inner, board, snapshot.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    board: Board,
    snapshot: &Snapshot,
    direction: Direction,
    theme: &Theme,
) {
    let tail = snapshot.snake.last().copied();
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = cell_to_terminal(inner, board, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if Some(*segment) == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

/// Maps a board cell to a terminal coordinate inside `inner`, or `None`
/// when the cell falls outside the visible region.
fn cell_to_terminal(inner: Rect, board: Board, cell: Cell) -> Option<(u16, u16)> {
    if !board.contains(cell) {
        return None;
    }

    let x = inner.x.checked_add(cell.x as u16)?;
    let y = inner.y.checked_add(cell.y as u16)?;
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}
