//! Top-level listing flow for lsdr.
//!
//! Reads the target directory, orders it for the selected mode and hands it to the
//! matching renderer. The result is the full text to print; non-fatal problems are
//! written to `diag` as they happen.

use crate::config::{Config, RenderMode};
use crate::core::{ListError, SystemOwners, browse_dir, terminal};
use crate::ui::{DetailFormatter, GridLayout, Painter, TreeWalker, icon_lookup};

use std::io::Write;

/// Renders the listing described by `config`.
///
/// # Errors
/// Returns [ListError::ReadDir] when the target directory itself cannot be read.
/// Unreadable entries, symlink targets and nested directories are reported to
/// `diag` instead.
pub fn render_listing(config: &Config, diag: &mut dyn Write) -> Result<String, ListError> {
    let general = config.general();
    let display = config.display();
    let painter = Painter::new(display.color());
    let icons = icon_lookup(display.icons());

    if display.mode() == RenderMode::Tree {
        return TreeWalker::new(general.show_hidden(), general.max_depth(), painter, icons)
            .with_icons(display.icons())
            .render(config.dir(), diag);
    }

    let mut entries =
        browse_dir(config.dir(), diag).map_err(|e| ListError::read_dir(config.dir(), e))?;
    general.formatter_for(display.mode()).filter_entries(&mut entries);

    let rendered = match display.mode() {
        RenderMode::Detail => {
            let owners = SystemOwners::new();
            DetailFormatter::new(&owners, painter)
                .with_inodes(display.show_inodes())
                .with_headers(display.headers())
                .with_link_failure(display.link_failure())
                .render(&entries, icons, diag)
        }
        RenderMode::Grid | RenderMode::Tree => {
            let width = display.width().unwrap_or_else(terminal::terminal_width);
            GridLayout::new(width).render(&entries, icons, &painter)
        }
    };

    Ok(rendered)
}
