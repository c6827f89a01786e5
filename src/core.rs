//! Core listing logic for lsdr.
//!
//! This module contains the non-rendering pieces used by every view:
//! - [fm]: directory reading and the entry model (see [browse_dir], [FileEntry], [EntryMeta]).
//! - [formatter]: filtering, sorting, display width and field formatting.
//! - [owners]: owner/group name resolution behind the [OwnerLookup] trait.
//! - [error]: the [ListError] kinds and the diagnostic reporter.
//! - [terminal]: terminal width and stdout output.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod owners;
pub mod terminal;

pub use error::{ListError, report};
pub use fm::{EntryMeta, FileEntry, browse_dir};
pub use formatter::{
    Formatter, TIMESTAMP_WIDTH, center, display_width, format_file_time, format_permissions,
    format_size, is_today, pad_left, pad_right,
};
pub use owners::{OwnerLookup, SystemOwners};
