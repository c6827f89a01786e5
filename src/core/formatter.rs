//! Sorting, filtering, and field formatting for file entries in lsdr.
//!
//! The [Formatter] struct holds the rules for hiding and ordering entries.
//! Every renderer runs its listing through [Formatter::filter_entries] and never
//! reorders the result afterwards.
//!
//! Also formats the permission, size and timestamp fields of the long listing and
//! measures terminal display width for the grid.

use crate::core::FileEntry;

use chrono::{DateTime, Local};
use unicode_width::UnicodeWidthChar;

use std::cmp::Ordering;
use std::time::SystemTime;

/// Width of the formatted modification time, e.g. `Mon Jan 02 15:04:05 2006`.
pub const TIMESTAMP_WIDTH: usize = 24;

const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

/// Formatter struct to handle filtering and sorting of file entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    dirs_first: bool,
    reverse: bool,
    show_hidden: bool,
}

impl Formatter {
    pub fn new(dirs_first: bool, reverse: bool, show_hidden: bool) -> Self {
        Self {
            dirs_first,
            reverse,
            show_hidden,
        }
    }

    /// Plain case-insensitive ascending order, as used by the tree view.
    pub fn name_only(show_hidden: bool) -> Self {
        Self::new(false, false, show_hidden)
    }

    /// Orders two entries.
    ///
    /// Directories win over files when `dirs_first` is set, and `reverse` never
    /// affects that partition. Otherwise names compare case-insensitively.
    pub fn compare(&self, a: &FileEntry, b: &FileEntry) -> Ordering {
        if self.dirs_first {
            match (a.is_dir(), b.is_dir()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
        let by_name = a.lowercase_name().cmp(b.lowercase_name());
        if self.reverse {
            by_name.reverse()
        } else {
            by_name
        }
    }

    /// Sorts the given file entries in place. The sort is stable, so names that only
    /// differ in case keep their listing order.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }

    /// Filters the given file entries in place and sorts what is left.
    pub fn filter_entries(&self, entries: &mut Vec<FileEntry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }
}

/// Terminal columns the string occupies: 2 for double-width characters, 1 for
/// everything else.
pub fn display_width(s: &str) -> usize {
    s.chars()
        .map(|c| if c.width() == Some(2) { 2 } else { 1 })
        .sum()
}

/// Builds the 10 character permission string, e.g. `drwxr-xr-x`.
///
/// setuid and setgid turn the user and group execute slot into `s`, sticky turns the
/// other execute slot into `t`, whether or not the execute bit itself is set.
pub fn format_permissions(mode: u32, is_dir: bool, is_symlink: bool) -> String {
    let first = if is_symlink {
        'l'
    } else if is_dir {
        'd'
    } else {
        '-'
    };

    let special = [
        (0o4000, 's'), // setuid
        (0o2000, 's'), // setgid
        (0o1000, 't'), // sticky
    ];
    let shifts = [6, 3, 0];

    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        let bits = (mode >> shift) & 0o7;
        let (flag, letter) = special[i];

        if bits & 0o4 != 0 {
            chars[base] = 'r';
        }
        if bits & 0o2 != 0 {
            chars[base + 1] = 'w';
        }
        if mode & flag != 0 {
            chars[base + 2] = letter;
        } else if bits & 0o1 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Splits a byte count into a display number and a unit label.
///
/// Below 1 KiB the exact byte count is used. Above, the quotient gets one decimal
/// while it is below 10 and none after that.
pub fn format_size(size: u64) -> (String, &'static str) {
    let (divisor, unit) = match size {
        s if s < KB => return (s.to_string(), "B"),
        s if s < MB => (KB, "KB"),
        s if s < GB => (MB, "MB"),
        _ => (GB, "GB"),
    };
    let quotient = size as f64 / divisor as f64;
    let number = if quotient < 10.0 {
        format!("{:.1}", quotient)
    } else {
        format!("{:.0}", quotient)
    };
    (number, unit)
}

/// Formats the modification time as `Mon Jan 02 15:04:05 2006` in local time.
/// Returns "-" if unknown.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format(TIMESTAMP_FORMAT).to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// True when the time falls on today's local date.
pub fn is_today(modified: Option<SystemTime>) -> bool {
    modified.is_some_and(|mtime| {
        let dt: DateTime<Local> = DateTime::from(mtime);
        dt.date_naive() == Local::now().date_naive()
    })
}

/// Pads `text` with trailing spaces up to `width` display columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let w = display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(w));
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(w)));
    out
}

/// Pads `text` with leading spaces up to `width` display columns.
pub fn pad_left(text: &str, width: usize) -> String {
    let w = display_width(text);
    let mut out = " ".repeat(width.saturating_sub(w));
    out.push_str(text);
    out
}

/// Centers `text` in `width` columns; extra space goes to the right.
/// Text wider than `width` is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let spare = width.saturating_sub(display_width(text));
    let left = spare / 2;
    let mut out = " ".repeat(left);
    out.push_str(text);
    out.push_str(&" ".repeat(spare - left));
    out
}
