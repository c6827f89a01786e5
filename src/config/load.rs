//! The main config module for lsdr.
//!
//! Provides the [Config] struct, built once at startup from the parsed command line
//! and passed by reference to every renderer. Nothing reads the target directory
//! from anywhere else.

use crate::config::{Display, General, LinkFailure, MaxDepth, RenderMode};
use crate::utils::cli::Cli;
use crate::utils::resolve_target_dir;

use std::path::{Path, PathBuf};

/// Environment variable that disables color when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Main configuration struct for lsdr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    dir: PathBuf,
    general: General,
    display: Display,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>, general: General, display: Display) -> Self {
        Config {
            dir: dir.into(),
            general,
            display,
        }
    }

    /// Builds the configuration from parsed flags.
    ///
    /// `-l` wins over `--tree` when both are given. Color is also disabled by a
    /// non-empty `NO_COLOR`.
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = if cli.long {
            RenderMode::Detail
        } else if cli.tree {
            RenderMode::Tree
        } else {
            RenderMode::Grid
        };

        let no_color_env = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());

        let general = General::new(
            cli.all,
            cli.dirs_first,
            cli.reverse,
            MaxDepth::from_flag(cli.depth).unwrap_or_default(),
        );

        let display = Display::default()
            .with_mode(mode)
            .with_color(!cli.no_color && !no_color_env)
            .with_icons(!cli.no_icons)
            .with_inodes(cli.inodes)
            .with_headers(cli.headers)
            .with_width(cli.width)
            .with_link_failure(if cli.strict_links {
                LinkFailure::Abort
            } else {
                LinkFailure::Skip
            });

        Config::new(resolve_target_dir(&cli.path), general, display)
    }

    // Getters

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(".", General::default(), Display::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn long_wins_over_tree() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["lsdr", "-l", "--tree", "/tmp"])?;
        let config = Config::from_cli(&cli);
        assert_eq!(config.display().mode(), RenderMode::Detail);
        assert_eq!(config.dir(), Path::new("/tmp"));
        Ok(())
    }

    #[test]
    fn defaults_match_plain_invocation() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["lsdr"])?;
        let config = Config::from_cli(&cli);
        assert_eq!(config.general(), &General::default());
        assert_eq!(config.display().mode(), RenderMode::Grid);
        assert_eq!(config.dir(), Path::new("."));
        Ok(())
    }

    #[test]
    fn tree_flags() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from([
            "lsdr",
            "--tree",
            "--depth",
            "-1",
            "-a",
            "--dirsfirst=false",
            "--strict-links",
        ])?;
        let config = Config::from_cli(&cli);
        assert_eq!(config.display().mode(), RenderMode::Tree);
        assert_eq!(
            config.general(),
            &General::new(true, false, false, MaxDepth::Unlimited)
        );
        assert_eq!(config.display().link_failure(), LinkFailure::Abort);
        Ok(())
    }
}
