//! Terminal coloring for lsdr.
//!
//! [Painter] wraps text in ANSI color sequences through `crossterm::style`.
//! With color disabled it passes text through untouched, so width measurement is
//! always done on the plain text before painting.

use crate::utils::parse_color;

use crossterm::style::{Color, Stylize, style};

/// Color tokens used by the long listing and the tree view.
pub mod palette {
    pub const HEADER: &str = "#FFFFFF";
    pub const INODE: &str = "#FFFFFF";
    pub const USER: &str = "#FCFBD2";
    pub const GROUP: &str = "#D1D0AB";
    pub const SIZE_SMALL: &str = "#FFFFFF";
    pub const SIZE_LARGE: &str = "#FFA500";
    pub const TIME_TODAY: &str = "#02E05F";
    pub const TIME_OLDER: &str = "#02BD91";
    pub const PERM_DIR: &str = "#00FFFF";
    pub const PERM_READ: &str = "#00FF00";
    pub const PERM_WRITE: &str = "#FFA500";
    pub const PERM_EXEC: &str = "#FF0000";
    pub const PERM_SPECIAL: &str = "#FFD700";
    pub const PERM_STICKY: &str = "#FFC0CB";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Painter { enabled }
    }

    /// Painter that never emits escape sequences.
    pub fn plain() -> Self {
        Painter { enabled: false }
    }

    /// Paints `text` with the color named by `token`. Empty tokens and disabled
    /// painters return the text unchanged.
    pub fn paint(&self, text: &str, token: &str) -> String {
        if !self.enabled || token.is_empty() || text.is_empty() {
            return text.to_string();
        }
        match parse_color(token) {
            Color::Reset => text.to_string(),
            color => style(text).with(color).to_string(),
        }
    }

    /// Underlined header cell.
    pub fn header(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        style(text)
            .with(parse_color(palette::HEADER))
            .underlined()
            .to_string()
    }

    /// Paints each character of a permission string by its meaning.
    pub fn permissions(&self, perms: &str, link_color: &str) -> String {
        if !self.enabled {
            return perms.to_string();
        }
        perms
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let token = match c {
                    'l' if i == 0 => link_color,
                    'd' if i == 0 => palette::PERM_DIR,
                    'r' => palette::PERM_READ,
                    'w' => palette::PERM_WRITE,
                    'x' => palette::PERM_EXEC,
                    's' => palette::PERM_SPECIAL,
                    't' => palette::PERM_STICKY,
                    _ => "",
                };
                self.paint(c.encode_utf8(&mut [0u8; 4]), token)
            })
            .collect()
    }
}

impl Default for Painter {
    fn default() -> Self {
        Painter::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_passes_through() {
        let painter = Painter::plain();
        assert_eq!(painter.paint("name", "#FF0000"), "name");
        assert_eq!(painter.header("Size"), "Size");
        assert_eq!(painter.permissions("drwxr-xr-x", "#BE67F5"), "drwxr-xr-x");
    }

    #[test]
    fn enabled_painter_keeps_text() {
        let painter = Painter::new(true);
        let painted = painter.paint("name", "#FF0000");
        assert!(painted.contains("name"));
        assert_eq!(painter.paint("name", ""), "name");
        assert_eq!(painter.paint("name", "default"), "name");
    }
}
