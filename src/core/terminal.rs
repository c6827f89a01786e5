//! Terminal queries and output for lsdr.
//!
//! The grid view is the only consumer of the terminal width. Rendered output is
//! written to stdout in one piece once rendering is complete.

use std::io::{self, Write};

/// Width used when no controlling terminal can be queried (CI, cron, detached runs).
pub const FALLBACK_WIDTH: usize = 80;

/// Number of columns available on the attached terminal.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => FALLBACK_WIDTH,
    }
}

/// Writes the rendered listing to stdout.
///
/// A closed pipe (e.g. `lsdr | head`) is not an error.
pub fn write_output(rendered: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout
        .write_all(rendered.as_bytes())
        .and_then(|_| stdout.flush())
    {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
