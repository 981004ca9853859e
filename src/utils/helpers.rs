//! Helpers for lsx.
//!
//! - Color and style parsing for the theme
//! - Home directory lookup for the config path
//! - ASCII lowercasing without a heap allocation for short strings
//! - Clamping the fallback terminal width

use crossterm::style::{Attribute, Color, ContentStyle};
use std::path::PathBuf;

/// Smallest fallback width accepted from the config.
pub const MIN_FALLBACK_WIDTH: usize = 1;
/// Largest fallback width accepted from the config.
pub const MAX_FALLBACK_WIDTH: usize = 1000;

/// Parses a string (color name or hex) into a crossterm color.
///
/// Supports the basic names (red, green, etc.), their "light" variants, and hex values
/// (#RRGGBB or #RGB). Returns None for "default", "reset" and anything unrecognised.
pub fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "default" | "reset" => None,
        "black" => Some(Color::Black),
        "red" => Some(Color::DarkRed),
        "green" => Some(Color::DarkGreen),
        "yellow" => Some(Color::DarkYellow),
        "blue" => Some(Color::DarkBlue),
        "magenta" => Some(Color::DarkMagenta),
        "cyan" => Some(Color::DarkCyan),
        "gray" | "grey" => Some(Color::Grey),
        "darkgray" | "darkgrey" => Some(Color::DarkGrey),
        "lightred" => Some(Color::Red),
        "lightgreen" => Some(Color::Green),
        "lightyellow" => Some(Color::Yellow),
        "lightblue" => Some(Color::Blue),
        "lightmagenta" => Some(Color::Magenta),
        "lightcyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        _ => {
            let hex = s.strip_prefix('#')?;
            let expanded = match hex.len() {
                6 => hex.to_string(),
                3 => hex.chars().map(|c| format!("{}{}", c, c)).collect(),
                _ => return None,
            };
            let rgb = u32::from_str_radix(&expanded, 16).ok()?;
            Some(Color::Rgb {
                r: ((rgb >> 16) & 0xFF) as u8,
                g: ((rgb >> 8) & 0xFF) as u8,
                b: (rgb & 0xFF) as u8,
            })
        }
    }
}

/// Parses a theme value: "reverse", "bold", or anything [parse_color] understands.
/// Unknown values give the empty style, which paints nothing.
pub fn parse_style(s: &str) -> ContentStyle {
    match s.trim().to_lowercase().as_str() {
        "reverse" => ContentStyle {
            attributes: Attribute::Reverse.into(),
            ..ContentStyle::default()
        },
        "bold" => ContentStyle {
            attributes: Attribute::Bold.into(),
            ..ContentStyle::default()
        },
        _ => ContentStyle {
            foreground_color: parse_color(s.trim()),
            ..ContentStyle::default()
        },
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Runs `f` on the ASCII-lowercased form of `s`, using a stack buffer for short input.
pub fn with_lowered_stack<R>(s: &str, f: impl FnOnce(&str) -> R) -> R {
    const CAP: usize = 64;
    if s.len() > CAP {
        return f(&s.to_ascii_lowercase());
    }
    let mut buf = [0u8; CAP];
    let bytes = &mut buf[..s.len()];
    bytes.copy_from_slice(s.as_bytes());
    bytes.make_ascii_lowercase();
    match std::str::from_utf8(bytes) {
        Ok(lowered) => f(lowered),
        Err(_) => f(&s.to_ascii_lowercase()),
    }
}

/// Safely clamp the fallback width.
///
/// Values outside [MIN_FALLBACK_WIDTH]..=[MAX_FALLBACK_WIDTH] are clamped with a warning.
pub fn clamp_fallback_width(value: usize) -> usize {
    let clamped = value.clamp(MIN_FALLBACK_WIDTH, MAX_FALLBACK_WIDTH);
    if clamped != value {
        eprintln!(
            "lsx: warning: fallback_width={} out of range ({}..={}), clamped to {}",
            value, MIN_FALLBACK_WIDTH, MAX_FALLBACK_WIDTH, clamped
        );
    }
    clamped
}
