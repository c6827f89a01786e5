//! Error kinds for lsdr and the diagnostic side channel.
//!
//! Only a failure to read the root directory is fatal. Every other [ListError] is
//! reported through [report] on the diagnostic sink (stderr in the binary) and the
//! listing keeps going.

use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Prefix for every diagnostic line written by lsdr.
pub const DIAG_PREFIX: &str = "[lsdr]";

#[derive(Debug, Error)]
pub enum ListError {
    /// Directory could not be read. Fatal at the root, subtree-local in tree mode.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// The directory iterator failed to yield an entry. There is no name to show.
    #[error("cannot read an entry of '{}': {source}", path.display())]
    ReadEntry { path: PathBuf, source: io::Error },

    /// Per-entry stat failure. The entry is skipped.
    #[error("cannot read metadata for '{name}': {source}")]
    Metadata { name: String, source: io::Error },

    /// A symlink whose target could not be read.
    #[error("cannot read symlink target of '{name}': {source}")]
    SymlinkTarget { name: String, source: io::Error },

    /// A directory that is already one of its own ancestors.
    #[error("directory cycle detected at '{}', not descending", path.display())]
    Cycle { path: PathBuf },
}

impl ListError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ListError::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Writes one diagnostic line for `err`.
///
/// Failures writing to the sink itself are ignored: there is nowhere left to report them.
pub fn report(diag: &mut dyn Write, err: &ListError) {
    let _ = writeln!(diag, "{} {}", DIAG_PREFIX, err);
}
