//! Listing tests for lsdr
//!
//! These tests drive the grid and long views through the public API against
//! temporary directories, with color and icons turned off so the output can be
//! compared as plain text.
//!
//! Temporary resources are automatically cleaned up after the tests complete.

use lsdr::app::render_listing;
use lsdr::config::{Config, Display, General, MaxDepth, RenderMode};
use lsdr::core::{ListError, browse_dir};
use lsdr::ui::{GridLayout, Icon, Painter};
use rand::Rng;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn plain(mode: RenderMode) -> Display {
    Display::default()
        .with_mode(mode)
        .with_color(false)
        .with_icons(false)
        .with_width(Some(80))
}

fn write_file(path: &Path, len: usize) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(&vec![b'x'; len])
}

/// dir1 (empty), a.txt (500 bytes), b.txt (2048 bytes).
fn sample_dir() -> Result<tempfile::TempDir, Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("dir1"))?;
    write_file(&dir.path().join("a.txt"), 500)?;
    write_file(&dir.path().join("b.txt"), 2048)?;
    Ok(dir)
}

#[test]
fn test_grid_dirs_first_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = sample_dir()?;
    let config = Config::new(dir.path(), General::default(), plain(RenderMode::Grid));

    let out = render_listing(&config, &mut Vec::new())?;
    assert_eq!(out, "dir1  a.txt  b.txt\n");
    Ok(())
}

#[test]
fn test_detail_sizes_and_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = sample_dir()?;
    let config = Config::new(dir.path(), General::default(), plain(RenderMode::Detail));

    let mut diag = Vec::new();
    let out = render_listing(&config, &mut diag)?;
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('d'));
    assert!(lines[0].ends_with("dir1"));
    assert!(lines[1].contains("500 B"));
    assert!(lines[1].ends_with("a.txt"));
    assert!(lines[2].contains("2.0 KB"));
    assert!(lines[2].ends_with("b.txt"));
    assert!(diag.is_empty());
    Ok(())
}

#[test]
fn test_detail_columns_align() -> Result<(), Box<dyn std::error::Error>> {
    let dir = sample_dir()?;
    write_file(&dir.path().join("c.txt"), 7)?;
    let config = Config::new(dir.path(), General::default(), plain(RenderMode::Detail));

    let out = render_listing(&config, &mut Vec::new())?;
    let name_cols: Vec<usize> = out
        .lines()
        .map(|l| l.rfind(' ').map_or(0, |i| l[..=i].chars().count()))
        .collect();
    assert!(name_cols.windows(2).all(|w| w[0] == w[1]), "{}", out);
    Ok(())
}

#[test]
fn test_hidden_and_reverse() -> Result<(), Box<dyn std::error::Error>> {
    let dir = sample_dir()?;
    File::create(dir.path().join(".secret"))?;

    let hidden_off = Config::new(dir.path(), General::default(), plain(RenderMode::Grid));
    assert!(!render_listing(&hidden_off, &mut Vec::new())?.contains(".secret"));

    let general = General::new(true, true, true, MaxDepth::default());
    let reversed = Config::new(dir.path(), general, plain(RenderMode::Grid));
    assert_eq!(
        render_listing(&reversed, &mut Vec::new())?,
        "dir1  b.txt  a.txt  .secret\n"
    );
    Ok(())
}

#[test]
fn test_root_read_failure() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(
        "/path/does/not/exist",
        General::default(),
        plain(RenderMode::Detail),
    );
    let Err(err) = render_listing(&config, &mut Vec::new()) else {
        return Err("listing a missing directory succeeded".into());
    };
    assert!(matches!(err, ListError::ReadDir { .. }));
    assert!(err.to_string().contains("/path/does/not/exist"));
    Ok(())
}

#[test]
fn test_grid_contains_every_entry_once() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let dir = tempdir()?;

    let count = rng.random_range(1..60);
    for i in 0..count {
        let len = rng.random_range(1..24);
        let name: String = std::iter::repeat_n('n', len).collect();
        File::create(dir.path().join(format!("{}{}", name, i)))?;
    }

    let mut entries = browse_dir(dir.path(), &mut Vec::new())?;
    General::default()
        .formatter_for(RenderMode::Grid)
        .filter_entries(&mut entries);

    for width in [1, 20, 80, 200] {
        let grid = GridLayout::new(width).build(&entries, |_| Icon::blank(""), &Painter::plain());

        let mut seen: Vec<&str> = grid
            .columns()
            .iter()
            .flat_map(|c| c.iter().map(|cell| cell.plain()))
            .collect();
        assert_eq!(seen.len(), count);

        assert!(!grid.columns().is_empty());
        assert!(grid.columns().iter().all(|c| c.len() <= grid.rows()));

        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), count);
    }
    Ok(())
}
