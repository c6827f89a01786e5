//! Recursive tree view.
//!
//! Walks `(path, depth)` pairs starting at depth 0 for the root's children. A call
//! whose depth exceeds the configured maximum returns before reading anything, so
//! entries at exactly the maximum depth are shown but their children are not.
//!
//! Siblings are always ordered by name, case-insensitively; the dirs-first and
//! reverse switches do not apply here.

use crate::config::MaxDepth;
use crate::core::{FileEntry, Formatter, ListError, browse_dir, report};
use crate::ui::icons::{DIR_COLOR, FILE_COLOR, Icon, dir_icon};
use crate::ui::paint::Painter;
use crate::utils::dir_label;

use std::io::Write;
use std::path::{Path, PathBuf};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const INDENT: &str = "│  ";

/// Identity of a directory on disk, used to spot directories that contain themselves.
type DirId = (u64, u64);

#[cfg(unix)]
fn dir_id(path: &Path) -> Option<DirId> {
    use std::os::unix::fs::MetadataExt;
    std::fs::metadata(path).ok().map(|md| (md.dev(), md.ino()))
}

#[cfg(not(unix))]
fn dir_id(_path: &Path) -> Option<DirId> {
    None
}

pub struct TreeWalker<F>
where
    F: Fn(&FileEntry) -> Icon,
{
    formatter: Formatter,
    max_depth: MaxDepth,
    painter: Painter,
    icons: bool,
    icon_for: F,
}

impl<F> TreeWalker<F>
where
    F: Fn(&FileEntry) -> Icon,
{
    pub fn new(show_hidden: bool, max_depth: MaxDepth, painter: Painter, icon_for: F) -> Self {
        TreeWalker {
            formatter: Formatter::name_only(show_hidden),
            max_depth,
            painter,
            icons: true,
            icon_for,
        }
    }

    /// Controls the glyph on the root line; entry glyphs come from `icon_for`.
    pub fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    /// Renders the tree under `root`, starting with the root label line.
    ///
    /// Only a failure to read `root` itself is returned; nested read failures are
    /// reported to `diag` and leave that subtree empty.
    pub fn render(&self, root: &Path, diag: &mut dyn Write) -> Result<String, ListError> {
        let entries = browse_dir(root, diag).map_err(|e| ListError::read_dir(root, e))?;

        let label = dir_label(root);
        let icon = dir_icon(&label);
        let glyph = if self.icons { icon.glyph } else { "" };

        let mut out = String::new();
        out.push_str(&self.painter.paint(glyph, icon.color));
        out.push_str(&self.painter.paint(&label, DIR_COLOR));
        out.push('\n');

        let mut ancestors: Vec<DirId> = dir_id(root).into_iter().collect();
        self.write_level(root, entries, 0, &mut ancestors, &mut out, diag);
        Ok(out)
    }

    /// Reads `path` and writes its subtree, unless `depth` is past the limit.
    fn walk(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &mut Vec<DirId>,
        out: &mut String,
        diag: &mut dyn Write,
    ) {
        if !self.max_depth.allows(depth) {
            return;
        }

        let id = dir_id(path);
        if let Some(id) = id
            && ancestors.contains(&id)
        {
            report(
                diag,
                &ListError::Cycle {
                    path: path.to_path_buf(),
                },
            );
            return;
        }

        let entries = match browse_dir(path, diag) {
            Ok(entries) => entries,
            Err(e) => {
                report(diag, &ListError::read_dir(path, e));
                return;
            }
        };

        if let Some(id) = id {
            ancestors.push(id);
        }
        self.write_level(path, entries, depth, ancestors, out, diag);
        if id.is_some() {
            ancestors.pop();
        }
    }

    /// Writes one directory's visible children at `depth`, recursing into directories.
    fn write_level(
        &self,
        path: &Path,
        mut entries: Vec<FileEntry>,
        depth: usize,
        ancestors: &mut Vec<DirId>,
        out: &mut String,
        diag: &mut dyn Write,
    ) {
        self.formatter.filter_entries(&mut entries);

        let indent = INDENT.repeat(depth);
        let last = entries.len().saturating_sub(1);

        for (i, entry) in entries.iter().enumerate() {
            let prefix = if i == last { LAST_BRANCH } else { BRANCH };
            let icon = (self.icon_for)(entry);
            let name_color = if entry.is_dir() { DIR_COLOR } else { FILE_COLOR };

            out.push_str(&indent);
            out.push_str(prefix);
            out.push_str(&self.painter.paint(icon.glyph, icon.color));
            out.push_str(&self.painter.paint(entry.name(), name_color));
            out.push('\n');

            if entry.is_dir() {
                let child: PathBuf = path.join(entry.os_name());
                self.walk(&child, depth + 1, ancestors, out, diag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::icons::icon_lookup;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn walker(max_depth: MaxDepth) -> TreeWalker<impl Fn(&FileEntry) -> Icon> {
        TreeWalker::new(false, max_depth, Painter::plain(), icon_lookup(false)).with_icons(false)
    }

    #[test]
    fn prefixes_and_indentation() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::create_dir(dir.path().join("src"))?;
        File::create(dir.path().join("src").join("main.rs"))?;
        File::create(dir.path().join("src").join("lib.rs"))?;
        File::create(dir.path().join("Cargo.toml"))?;

        let mut diag = Vec::new();
        let out = walker(MaxDepth::Unlimited).render(dir.path(), &mut diag)?;
        let lines: Vec<&str> = out.lines().skip(1).collect();

        assert_eq!(
            lines,
            vec![
                "├── Cargo.toml",
                "└── src",
                "│  ├── lib.rs",
                "│  └── main.rs",
            ]
        );
        assert!(diag.is_empty());
        Ok(())
    }

    #[test]
    fn root_line_uses_base_name() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let root = dir.path().join("project");
        fs::create_dir(&root)?;

        let out = walker(MaxDepth::Limited(0)).render(&root, &mut Vec::new())?;
        assert_eq!(out, "project\n");
        Ok(())
    }

    #[test]
    fn tree_ignores_dirs_first() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.txt"))?;
        fs::create_dir(dir.path().join("B"))?;
        File::create(dir.path().join("c.txt"))?;

        let out = walker(MaxDepth::Limited(0)).render(dir.path(), &mut Vec::new())?;
        let names: Vec<&str> = out.lines().skip(1).map(|l| &l[10..]).collect();
        assert_eq!(names, vec!["a.txt", "B", "c.txt"]);
        Ok(())
    }

    #[test]
    fn missing_root_is_fatal() {
        let result =
            walker(MaxDepth::Unlimited).render(Path::new("/path/does/not/exist"), &mut Vec::new());
        assert!(matches!(result, Err(ListError::ReadDir { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn descends_into_non_utf8_dirs() -> Result<(), Box<dyn std::error::Error>> {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir()?;
        let bad = dir.path().join(OsStr::from_bytes(b"bad\xff"));
        if fs::create_dir(&bad).is_err() {
            return Ok(());
        }
        File::create(bad.join("inner.txt"))?;

        let mut diag = Vec::new();
        let out = walker(MaxDepth::Unlimited).render(dir.path(), &mut diag)?;
        let lines: Vec<&str> = out.lines().skip(1).collect();

        assert_eq!(lines, vec!["└── bad\u{fffd}", "│  └── inner.txt"]);
        assert!(diag.is_empty());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subtree_is_local() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir()?;
        let locked = dir.path().join("locked");
        fs::create_dir(&locked)?;
        File::create(locked.join("secret.txt"))?;
        fs::create_dir(dir.path().join("open"))?;
        File::create(dir.path().join("open").join("visible.txt"))?;
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

        // root ignores permission bits; nothing to observe then
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
            return Ok(());
        }

        let mut diag = Vec::new();
        let out = walker(MaxDepth::Unlimited).render(dir.path(), &mut diag);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        let out = out?;

        assert!(out.contains("locked"));
        assert!(!out.contains("secret.txt"));
        assert!(out.contains("visible.txt"));
        assert!(String::from_utf8(diag)?.contains("cannot read directory"));
        Ok(())
    }
}
