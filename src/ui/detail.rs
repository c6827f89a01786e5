//! Long listing view.
//!
//! Rendering happens in two passes because every column is as wide as its widest
//! value across the whole listing:
//! 1. measure: resolve owner and group, format the size, count inode digits;
//! 2. render: emit one aligned line per entry.
//!
//! An entry whose metadata could not be read is reported and skipped. What happens
//! on an unreadable symlink target is decided by [LinkFailure].

use crate::config::LinkFailure;
use crate::core::{
    EntryMeta, FileEntry, ListError, OwnerLookup, TIMESTAMP_WIDTH, center, display_width,
    format_file_time, format_permissions, format_size, is_today, pad_left, pad_right, report,
};
use crate::ui::icons::{Icon, LINK_COLOR};
use crate::ui::paint::{Painter, palette};

use std::io::{self, Write};

/// Minimum column widths when headers are shown, so each label fits its column.
const MIN_INODE_HEADER_WIDTH: usize = 6;
const MIN_USER_HEADER_WIDTH: usize = 4;
const MIN_GROUP_HEADER_WIDTH: usize = 5;
/// Permission string plus the extra separator used with headers.
const PERMS_HEADER_WIDTH: usize = 11;
/// Width of the size unit field (B, KB, MB, GB).
const SIZE_UNIT_WIDTH: usize = 2;
/// Sizes at or above this are painted in the large-size color.
const LARGE_SIZE: u64 = 1024 * 1024;

const LINK_ARROW: &str = " \u{21d2} ";

/// Values gathered for one entry in the measuring pass.
struct Measured<'a> {
    entry: &'a FileEntry,
    meta: &'a EntryMeta,
    user: String,
    group: String,
    size_num: String,
    size_unit: &'static str,
    inode: String,
}

/// Running column maxima.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Widths {
    user: usize,
    group: usize,
    size_num: usize,
    inode: usize,
}

/// Two-pass long listing renderer.
pub struct DetailFormatter<'a, O: OwnerLookup> {
    owners: &'a O,
    painter: Painter,
    show_inodes: bool,
    headers: bool,
    link_failure: LinkFailure,
}

impl<'a, O: OwnerLookup> DetailFormatter<'a, O> {
    pub fn new(owners: &'a O, painter: Painter) -> Self {
        DetailFormatter {
            owners,
            painter,
            show_inodes: false,
            headers: false,
            link_failure: LinkFailure::Skip,
        }
    }

    pub fn with_inodes(mut self, show_inodes: bool) -> Self {
        self.show_inodes = show_inodes;
        self
    }

    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_link_failure(mut self, link_failure: LinkFailure) -> Self {
        self.link_failure = link_failure;
        self
    }

    /// Renders `entries`, which must already be filtered and sorted.
    /// Per-entry failures go to `diag`.
    pub fn render<F>(&self, entries: &[FileEntry], icon_for: F, diag: &mut dyn Write) -> String
    where
        F: Fn(&FileEntry) -> Icon,
    {
        let (rows, widths) = self.measure(entries, diag);

        let mut out = String::new();
        if self.headers {
            out.push_str(&self.header_line(&widths));
            out.push('\n');
        }

        for row in &rows {
            let link = match row.entry.link_target() {
                None => None,
                Some(Ok(target)) => Some(target.to_string_lossy()),
                Some(Err(kind)) => {
                    report(
                        diag,
                        &ListError::SymlinkTarget {
                            name: row.entry.name().to_string(),
                            source: io::Error::from(kind),
                        },
                    );
                    match self.link_failure {
                        LinkFailure::Skip => continue,
                        LinkFailure::Abort => break,
                    }
                }
            };

            out.push_str(&self.line(row, &widths, link.as_deref(), &icon_for));
            out.push('\n');
        }
        out
    }

    /// First pass: resolve the display values and track column maxima.
    fn measure<'e>(
        &self,
        entries: &'e [FileEntry],
        diag: &mut dyn Write,
    ) -> (Vec<Measured<'e>>, Widths) {
        let mut widths = Widths::default();
        let mut rows = Vec::with_capacity(entries.len());

        for entry in entries {
            let meta = match entry.meta() {
                Ok(meta) => meta,
                Err(kind) => {
                    report(
                        diag,
                        &ListError::Metadata {
                            name: entry.name().to_string(),
                            source: io::Error::from(kind),
                        },
                    );
                    continue;
                }
            };

            let user = self.owners.user_label(meta.uid);
            let group = self.owners.group_label(meta.gid);
            let (size_num, size_unit) = format_size(meta.size);
            let inode = meta.inode.to_string();

            widths.user = widths.user.max(display_width(&user));
            widths.group = widths.group.max(display_width(&group));
            widths.size_num = widths.size_num.max(size_num.len());
            widths.inode = widths.inode.max(inode.len());

            rows.push(Measured {
                entry,
                meta,
                user,
                group,
                size_num,
                size_unit,
                inode,
            });
        }

        if self.headers {
            widths.inode = widths.inode.max(MIN_INODE_HEADER_WIDTH);
            widths.user = widths.user.max(MIN_USER_HEADER_WIDTH);
            widths.group = widths.group.max(MIN_GROUP_HEADER_WIDTH);
        }
        (rows, widths)
    }

    /// Second pass: one line in fixed field order.
    fn line<F>(
        &self,
        row: &Measured<'_>,
        widths: &Widths,
        link: Option<&str>,
        icon_for: &F,
    ) -> String
    where
        F: Fn(&FileEntry) -> Icon,
    {
        let p = &self.painter;
        let meta = row.meta;
        let entry = row.entry;
        let mut fields: Vec<String> = Vec::with_capacity(9);

        if self.show_inodes {
            fields.push(p.paint(&pad_right(&row.inode, widths.inode), palette::INODE));
            if self.headers {
                fields.push(String::new());
            }
        }

        let perms = format_permissions(meta.mode, entry.is_dir(), entry.is_symlink());
        let mut perms = p.permissions(&perms, LINK_COLOR);
        if self.headers {
            perms.push(' ');
        }
        fields.push(perms);

        fields.push(p.paint(&pad_right(&row.user, widths.user), palette::USER));
        fields.push(p.paint(&pad_right(&row.group, widths.group), palette::GROUP));

        let size_color = if meta.size < LARGE_SIZE {
            palette::SIZE_SMALL
        } else {
            palette::SIZE_LARGE
        };
        fields.push(p.paint(&pad_left(&row.size_num, widths.size_num), size_color));
        fields.push(p.paint(&pad_right(row.size_unit, SIZE_UNIT_WIDTH), size_color));

        let time_color = if is_today(meta.modified) {
            palette::TIME_TODAY
        } else {
            palette::TIME_OLDER
        };
        let time = pad_right(&format_file_time(meta.modified), TIMESTAMP_WIDTH);
        fields.push(p.paint(&time, time_color));

        let icon = icon_for(entry);
        let mut name = p.paint(&format!("{}{}", icon.glyph, entry.name()), icon.color);
        if let Some(target) = link {
            name.push_str(LINK_ARROW);
            name.push_str(&p.paint(target, LINK_COLOR));
        }
        fields.push(name);

        fields.join(" ")
    }

    /// Header row laid over the same column widths as the entry lines.
    fn header_line(&self, widths: &Widths) -> String {
        let p = &self.painter;
        let mut fields: Vec<String> = Vec::with_capacity(8);

        if self.show_inodes {
            fields.push(p.header(&center("Inodes", widths.inode)));
            fields.push(String::new());
        }
        fields.push(p.header(&center("Permissions", PERMS_HEADER_WIDTH)));
        fields.push(p.header(&center("User", widths.user)));
        fields.push(p.header(&center("Group", widths.group)));
        let size_width = widths.size_num + 1 + SIZE_UNIT_WIDTH;
        fields.push(p.header(&center("Size", size_width)));
        fields.push(p.header(&center("Last Modified", TIMESTAMP_WIDTH)));
        fields.push(p.header("Name"));

        fields.join(" ")
    }
}
