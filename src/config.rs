use ratatui::style::Color;

/// Edge length of one grid cell in canvas pixels.
///
/// The tick engine itself is cell-size-agnostic; this only feeds the
/// pixel-to-cell derivation in [`crate::grid::Board::from_pixels`].
pub const CELL_SIZE_PX: u32 = 20;

/// Default square canvas edge in pixels.
pub const DEFAULT_CANVAS_PX: u32 = 600;

/// Tick interval at the start of a game, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 150;

/// Fastest allowed tick interval, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 70;

/// How much the interval shrinks on each speed-up, in milliseconds.
pub const SPEED_STEP_MS: u64 = 10;

/// Number of apples between speed-ups.
pub const APPLES_PER_SPEED_STEP: u32 = 3;

/// Points granted per apple.
pub const POINTS_PER_APPLE: u32 = 10;

/// Number of segments the snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Directional head glyphs.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// A color theme applied to all visual elements.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head glyph.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for food.
    pub food: Color,
    /// Background color for the play area.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Default theme, lifted from the canvas original's palette.
pub const THEME_CANVAS: Theme = Theme {
    name: "Canvas",
    snake_head: Color::Rgb(78, 255, 117),
    snake_body: Color::Rgb(46, 204, 113),
    snake_tail: Color::Rgb(39, 160, 90),
    food: Color::Rgb(255, 59, 59),
    play_bg: Color::Rgb(26, 26, 26),
    border_fg: Color::DarkGray,
    hud_text: Color::Gray,
    hud_accent: Color::Rgb(78, 255, 117),
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_text: Color::Cyan,
    hud_accent: Color::White,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    hud_text: Color::Magenta,
    hud_accent: Color::White,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All built-in themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CANVAS, THEME_OCEAN, THEME_NEON];

/// Looks up a built-in theme by its case-insensitive name.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    THEMES
        .iter()
        .copied()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
