use std::fs;
use std::io;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{builtin_theme, Theme, THEME_CANVAS};

/// A user theme file: any subset of the color slots.
///
/// Missing slots fall back to the default theme; colors are `#RRGGBB`
/// hex or named ANSI colors.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    snake_head: Option<String>,
    snake_body: Option<String>,
    snake_tail: Option<String>,
    food: Option<String>,
    play_bg: Option<String>,
    border_fg: Option<String>,
    hud_text: Option<String>,
    hud_accent: Option<String>,
    menu_title: Option<String>,
    menu_footer: Option<String>,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] io::Error),
    #[error("theme file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("theme field '{field}' has unrecognized color '{value}'")]
    InvalidColor { field: &'static str, value: String },
}

/// Resolves `--theme`: a built-in name, or a path to a JSON theme file.
pub fn resolve_theme(arg: &str) -> Result<Theme, ThemeError> {
    if let Some(theme) = builtin_theme(arg) {
        return Ok(theme);
    }
    load_theme(Path::new(arg))
}

/// Loads a theme from a JSON file, defaulting unset slots.
pub fn load_theme(path: &Path) -> Result<Theme, ThemeError> {
    theme_from_str(&fs::read_to_string(path)?)
}

fn theme_from_str(raw: &str) -> Result<Theme, ThemeError> {
    let file: ThemeFile = serde_json::from_str(raw)?;
    let base = THEME_CANVAS;

    Ok(Theme {
        name: "Custom",
        snake_head: slot(file.snake_head, "snake_head", base.snake_head)?,
        snake_body: slot(file.snake_body, "snake_body", base.snake_body)?,
        snake_tail: slot(file.snake_tail, "snake_tail", base.snake_tail)?,
        food: slot(file.food, "food", base.food)?,
        play_bg: slot(file.play_bg, "play_bg", base.play_bg)?,
        border_fg: slot(file.border_fg, "border_fg", base.border_fg)?,
        hud_text: slot(file.hud_text, "hud_text", base.hud_text)?,
        hud_accent: slot(file.hud_accent, "hud_accent", base.hud_accent)?,
        menu_title: slot(file.menu_title, "menu_title", base.menu_title)?,
        menu_footer: slot(file.menu_footer, "menu_footer", base.menu_footer)?,
    })
}

fn slot(
    value: Option<String>,
    field: &'static str,
    fallback: Color,
) -> Result<Color, ThemeError> {
    match value {
        None => Ok(fallback),
        Some(raw) => parse_color(&raw).ok_or(ThemeError::InvalidColor { field, value: raw }),
    }
}

fn parse_color(value: &str) -> Option<Color> {
    if let Some(color) = parse_hex_color(value) {
        return Some(color);
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}
