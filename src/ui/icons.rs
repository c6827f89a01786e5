//! Module for mapping file types and names to Nerd Font icons.
//!
//! The main function [icon_for] takes a [FileEntry] and returns the glyph and the
//! color token used to paint it. Every glyph carries one trailing space so it can be
//! prepended to the name directly.

use crate::core::FileEntry;

use phf::phf_map;

/// Icon glyph plus the color token it is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: &'static str,
}

impl Icon {
    const fn new(glyph: &'static str, color: &'static str) -> Self {
        Icon { glyph, color }
    }

    /// Empty glyph, used when icons are disabled.
    pub const fn blank(color: &'static str) -> Self {
        Icon { glyph: "", color }
    }
}

pub const DIR_COLOR: &str = "#00FFFF";
pub const FILE_COLOR: &str = "#FFFFFF";
pub const LINK_COLOR: &str = "#BE67F5";
pub const EXEC_COLOR: &str = "#FF0303";

const DIR_ICON: Icon = Icon::new("\u{f115} ", DIR_COLOR);
const FILE_ICON: Icon = Icon::new("\u{f15b} ", FILE_COLOR);
const LINK_ICON: Icon = Icon::new("\u{f481} ", LINK_COLOR);
const EXEC_ICON: Icon = Icon::new("\u{f489} ", EXEC_COLOR);

/// File extension to icon mapping.
/// Keys are lowercased extensions without the dot.
static EXT_ICON_MAP: phf::Map<&'static str, Icon> = phf_map! {
    "pub" => Icon::new("\u{f0dd6} ", "#FFFF00"),
    "py" => Icon::new("\u{f0320} ", "#ADD8E6"),
    "go" => Icon::new("\u{e627} ", "#039EFF"),
    "zip" => Icon::new("\u{f410} ", "#FF0000"),
    "tar" => Icon::new("\u{f410} ", "#FF0000"),
    "gz" => Icon::new("\u{f410} ", "#FF0000"),
    "pdf" => Icon::new("\u{f1c1} ", "#FF0000"),
    "png" => Icon::new("\u{f1c5} ", "#00FF00"),
    "jpg" => Icon::new("\u{f1c5} ", "#00FF00"),
    "jpeg" => Icon::new("\u{f1c5} ", "#00FF00"),
    "gif" => Icon::new("\u{f1c5} ", "#00FF00"),
    "svg" => Icon::new("\u{f1c5} ", "#00FF00"),
    "rs" => Icon::new("\u{e7a8} ", "#DEA584"),
    "json" => Icon::new("\u{e60b} ", "#FFFFFF"),
    "toml" => Icon::new("\u{e615} ", "#FFFFFF"),
    "yml" => Icon::new("\u{e615} ", "#FFFFFF"),
    "yaml" => Icon::new("\u{e615} ", "#FFFFFF"),
    "dmg" => Icon::new("\u{f09d8} ", "#9900FF"),
    "txt" => Icon::new("\u{f0f6} ", "#FFFFFF"),
    "list" => Icon::new("\u{f03a} ", "#FFFFFF"),
    "md" => Icon::new("\u{f48a} ", "#FFFFFF"),
    "sh" => Icon::new("\u{e795} ", "#89E051"),
    "js" => Icon::new("\u{e74e} ", "#F1E05A"),
    "ts" => Icon::new("\u{e628} ", "#3178C6"),
    "html" => Icon::new("\u{e736} ", "#E34C26"),
    "css" => Icon::new("\u{e749} ", "#563D7C"),
    "c" => Icon::new("\u{e61e} ", "#599EFF"),
    "h" => Icon::new("\u{f0fd} ", "#A074C4"),
    "cpp" => Icon::new("\u{e61d} ", "#F34B7D"),
    "lock" => Icon::new("\u{f023} ", "#BBBBBB"),
    "mp3" => Icon::new("\u{f001} ", "#FF8C00"),
    "mp4" => Icon::new("\u{f008} ", "#FD971F"),
    "log" => Icon::new("\u{f18d} ", "#AAAAAA"),
};

/// Special file names.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, Icon> = phf_map! {
    "README.md" => Icon::new("\u{f48a} ", "#FFFF00"),
    "README" => Icon::new("\u{f48a} ", "#FFFF00"),
    "LICENSE" => Icon::new("\u{f02d} ", "#D0BF41"),
    "Makefile" => Icon::new("\u{e779} ", "#6D8086"),
    "Cargo.toml" => Icon::new("\u{e7a8} ", "#DEA584"),
    "Cargo.lock" => Icon::new("\u{f023} ", "#DEA584"),
    "Dockerfile" => Icon::new("\u{e7b0} ", "#458EE6"),
    ".gitignore" => Icon::new("\u{e702} ", "#F54D27"),
    ".env" => Icon::new("\u{f462} ", "#FAF743"),
};

/// Special directory names.
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, Icon> = phf_map! {
    "Music" => Icon::new("\u{f1359} ", DIR_COLOR),
    "Documents" => Icon::new("\u{f0219} ", DIR_COLOR),
    "Downloads" => Icon::new("\u{f1462} ", DIR_COLOR),
    "Pictures" => Icon::new("\u{f024f} ", DIR_COLOR),
    "Videos" => Icon::new("\u{f0567} ", DIR_COLOR),
    "Desktop" => Icon::new("\u{f108} ", DIR_COLOR),
    "Public" => Icon::new("\u{f0ac} ", DIR_COLOR),
    ".git" => Icon::new("\u{e5fb} ", DIR_COLOR),
    "node_modules" => Icon::new("\u{e5fa} ", DIR_COLOR),
};

/// Icon for a directory by its name alone; used for the tree root line.
pub fn dir_icon(name: &str) -> Icon {
    SPECIAL_DIR_ICON_MAP.get(name).copied().unwrap_or(DIR_ICON)
}

/// Get the icon for a given file entry.
///
/// Order: symlink, directory (special name or folder), executable file, special
/// file name, extension, generic file.
pub fn icon_for(entry: &FileEntry) -> Icon {
    if entry.is_symlink() {
        return LINK_ICON;
    }

    if entry.is_dir() {
        return dir_icon(entry.name());
    }

    if entry.is_executable() {
        return EXEC_ICON;
    }

    if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(entry.name()) {
        return *icon;
    }

    EXT_ICON_MAP
        .get(entry.extension())
        .copied()
        .unwrap_or(FILE_ICON)
}

/// Icon lookup honoring the icons switch: blank glyphs keep the color token so
/// names are still painted.
pub fn icon_lookup(icons: bool) -> impl Fn(&FileEntry) -> Icon {
    move |entry| {
        let icon = icon_for(entry);
        if icons { icon } else { Icon::blank(icon.color) }
    }
}
