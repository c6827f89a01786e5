//! Directory reading and the entry data model for lsdr.
//!
//! Provides the [FileEntry] struct which every renderer consumes.
//! Entries are immutable snapshots built once per render by [browse_dir].

use crate::core::error::{ListError, report};

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata captured from `lstat` for one entry.
///
/// `mode` holds the permission bits plus the setuid (0o4000), setgid (0o2000)
/// and sticky (0o1000) flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntryMeta {
    pub size: u64,
    pub mode: u32,
    pub uid: u32,
    pub gid: u32,
    pub inode: u64,
    pub modified: Option<SystemTime>,
}

impl EntryMeta {
    pub(crate) fn from_metadata(md: &std::fs::Metadata) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            EntryMeta {
                size: md.len(),
                mode: md.mode() & 0o7777,
                uid: md.uid(),
                gid: md.gid(),
                inode: md.ino(),
                modified: md.modified().ok(),
            }
        }
        #[cfg(not(unix))]
        {
            let mode = if md.permissions().readonly() {
                0o444
            } else {
                0o644
            };
            EntryMeta {
                size: md.len(),
                mode,
                modified: md.modified().ok(),
                ..EntryMeta::default()
            }
        }
    }
}

/// Represents a single entry in a directory listing.
///
/// Holds the raw name as the OS returned it, a lossy display copy, the lowercased
/// sort key and extension, attribute flags, the stat result and, for symlinks, the
/// result of reading the link target.
/// A failed stat or readlink is kept as its [io::ErrorKind] so the renderer that
/// needs the value decides how to report it.
#[derive(Debug, Clone)]
pub struct FileEntry {
    raw_name: Box<OsStr>,
    name: Box<str>,
    lowercase_name: Box<str>,
    extension: Box<str>,
    flags: u8,
    meta: Result<EntryMeta, io::ErrorKind>,
    link: Option<Result<PathBuf, io::ErrorKind>>,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;
    pub const IS_EXECUTABLE: u8 = 1 << 3;

    #[cfg(unix)]
    const EXEC_FLAG: u32 = 0o111;

    /// Builds an entry. The hidden flag is derived from the name.
    pub fn new(
        name: impl Into<OsString>,
        mut flags: u8,
        meta: Result<EntryMeta, io::ErrorKind>,
        link: Option<Result<PathBuf, io::ErrorKind>>,
    ) -> Self {
        let raw_name: OsString = name.into();
        let name = raw_name.to_string_lossy().into_owned();
        if name.starts_with('.') {
            flags |= Self::IS_HIDDEN;
        } else {
            flags &= !Self::IS_HIDDEN;
        }
        let extension = Path::new(&name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        FileEntry {
            raw_name: raw_name.into_boxed_os_str(),
            lowercase_name: name.to_lowercase().into_boxed_str(),
            extension: extension.into_boxed_str(),
            name: name.into_boxed_str(),
            flags,
            meta,
            link,
        }
    }

    // Accessors

    /// Name for display. Bytes that are not valid UTF-8 are replaced.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name exactly as read from the directory; use this to build paths.
    #[inline]
    pub fn os_name(&self) -> &OsStr {
        &self.raw_name
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    /// Lowercased extension without the dot, empty when there is none.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.flags & Self::IS_EXECUTABLE != 0
    }

    #[inline]
    pub fn meta(&self) -> Result<&EntryMeta, io::ErrorKind> {
        self.meta.as_ref().map_err(|kind| *kind)
    }

    /// `None` for anything that is not a symlink.
    #[inline]
    pub fn link_target(&self) -> Option<Result<&Path, io::ErrorKind>> {
        self.link
            .as_ref()
            .map(|res| res.as_deref().map_err(|kind| *kind))
    }
}

/// Reads the contents of the provided directory and returns them in a vector of FileEntry.
///
/// Entries come back in the order the OS yields them; filtering and sorting are the
/// caller's job. Directory-ness is taken from `lstat`, so a symlink to a directory
/// is a symlink, not a directory.
///
/// An entry whose stat fails is still returned, carrying the error for the renderer
/// to report. An entry the iterator cannot yield at all has no name to carry, so it
/// is reported to `diag` here.
pub fn browse_dir(path: &Path, diag: &mut dyn Write) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(64);

    for entry in std::fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                report(
                    diag,
                    &ListError::ReadEntry {
                        path: path.to_path_buf(),
                        source: e,
                    },
                );
                continue;
            }
        };

        let md = entry.metadata();
        let ft = match &md {
            Ok(md) => Some(md.file_type()),
            Err(_) => entry.file_type().ok(),
        };
        let meta = md
            .map(|md| EntryMeta::from_metadata(&md))
            .map_err(|e| e.kind());

        let mut flags = 0u8;
        let is_symlink = ft.is_some_and(|ft| ft.is_symlink());
        if ft.is_some_and(|ft| ft.is_dir()) {
            flags |= FileEntry::IS_DIR;
        }
        if is_symlink {
            flags |= FileEntry::IS_SYMLINK;
        }

        #[cfg(unix)]
        {
            if let Ok(md) = &meta
                && ft.is_some_and(|ft| ft.is_file())
                && md.mode & FileEntry::EXEC_FLAG != 0
            {
                flags |= FileEntry::IS_EXECUTABLE;
            }
        }

        let link = is_symlink.then(|| std::fs::read_link(entry.path()).map_err(|e| e.kind()));

        entries.push(FileEntry::new(entry.file_name(), flags, meta, link));
    }
    Ok(entries)
}
