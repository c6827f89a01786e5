//! Tree view tests for lsdr
//!
//! Builds small directory trees in temporary directories and checks how the depth
//! limit, hidden entries and symlinks shape the output.
//!
//! Temporary resources are automatically cleaned up after the tests complete.

use lsdr::app::render_listing;
use lsdr::config::{Config, Display, General, MaxDepth, RenderMode};
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn tree_config(root: &Path, show_hidden: bool, depth: i64) -> Config {
    let max_depth = MaxDepth::from_flag(depth).unwrap_or_default();
    let general = General::new(show_hidden, true, false, max_depth);
    let display = Display::default()
        .with_mode(RenderMode::Tree)
        .with_color(false)
        .with_icons(false);
    Config::new(root, general, display)
}

/// root/a/b/c.txt
fn nested() -> Result<tempfile::TempDir, Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("a").join("b"))?;
    File::create(dir.path().join("a").join("b").join("c.txt"))?;
    Ok(dir)
}

fn body(out: &str) -> Vec<&str> {
    out.lines().skip(1).collect()
}

#[test]
fn test_depth_zero_shows_top_level_only() -> Result<(), Box<dyn std::error::Error>> {
    let dir = nested()?;
    let out = render_listing(&tree_config(dir.path(), false, 0), &mut Vec::new())?;
    assert_eq!(body(&out), vec!["└── a"]);
    Ok(())
}

#[test]
fn test_depth_one_stops_above_leaf() -> Result<(), Box<dyn std::error::Error>> {
    let dir = nested()?;
    let out = render_listing(&tree_config(dir.path(), false, 1), &mut Vec::new())?;
    assert_eq!(body(&out), vec!["└── a", "│  └── b"]);
    Ok(())
}

#[test]
fn test_unlimited_depth() -> Result<(), Box<dyn std::error::Error>> {
    let dir = nested()?;
    let out = render_listing(&tree_config(dir.path(), false, -1), &mut Vec::new())?;
    assert_eq!(body(&out), vec!["└── a", "│  └── b", "│  │  └── c.txt"]);
    Ok(())
}

#[test]
fn test_hidden_entries_at_every_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = nested()?;
    File::create(dir.path().join(".top"))?;
    File::create(dir.path().join("a").join(".inner"))?;

    let hidden = render_listing(&tree_config(dir.path(), false, -1), &mut Vec::new())?;
    assert!(!hidden.contains(".top"));
    assert!(!hidden.contains(".inner"));

    let shown = render_listing(&tree_config(dir.path(), true, -1), &mut Vec::new())?;
    assert!(shown.contains("├── .top\n"));
    assert!(shown.contains("│  ├── .inner\n"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_dir_not_followed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = nested()?;
    std::os::unix::fs::symlink(dir.path().join("a"), dir.path().join("loop"))?;

    let mut diag = Vec::new();
    let out = render_listing(&tree_config(dir.path(), false, -1), &mut diag)?;
    assert_eq!(
        body(&out),
        vec!["├── a", "│  └── b", "│  │  └── c.txt", "└── loop"]
    );
    assert!(diag.is_empty());
    Ok(())
}
