//! Helpers for lsdr.
//!
//! - Color parsing from names or hex codes into crossterm colors
//! - Expanding a leading `~` in the target path
//! - Display label for a directory path

use crossterm::style::Color;
use std::path::{Path, PathBuf};

/// Parses a string (color name or hex) into a crossterm color.
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB).
/// Anything else yields `Color::Reset`.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" | "" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Grey,
        "darkgray" | "darkgrey" => Color::DarkGrey,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb {
                        r: ((rgb >> 16) & 0xFF) as u8,
                        g: ((rgb >> 8) & 0xFF) as u8,
                        b: (rgb & 0xFF) as u8,
                    };
                }
            }
            // fallback
            Color::Reset
        }
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading `~` or `~/` to the home directory.
/// Paths without the prefix, or when no home directory is known, are returned as is.
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Resolves the directory argument given on the command line.
pub fn resolve_target_dir(arg: &str) -> PathBuf {
    let trimmed = arg.trim();
    if trimmed.is_empty() {
        return PathBuf::from(".");
    }
    expand_home_path(trimmed)
}

/// Label for the root line of the tree view: `.` for the current directory,
/// otherwise the last path component.
pub fn dir_label(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if raw == "." || raw == "./" {
        return ".".to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| raw.into_owned())
}
