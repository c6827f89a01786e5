//! Command-line argument parsing for lsdr.
//!
//! Flags mirror the classic lsd-style switches. Parsing is the only thing done here;
//! [crate::config::Config::from_cli] turns the result into the runtime configuration.

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "lsdr",
    version,
    about = "List directory contents as an icon grid, a long listing or a tree."
)]
pub struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    pub path: String,

    /// Show dotfiles
    #[arg(short = 'a', long = "all", action = ArgAction::SetTrue)]
    pub all: bool,

    /// Long listing with permissions, owner, size and time
    #[arg(short = 'l', long = "long", action = ArgAction::SetTrue)]
    pub long: bool,

    /// Show a tree view
    #[arg(long = "tree", action = ArgAction::SetTrue)]
    pub tree: bool,

    /// Maximum depth for the tree view. -1 means no limit
    #[arg(
        long = "depth",
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub depth: i64,

    /// Sort directories before files
    #[arg(
        long = "dirsfirst",
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
        action = ArgAction::Set
    )]
    pub dirs_first: bool,

    /// Sort in reverse order
    #[arg(short = 'r', long = "reverse", action = ArgAction::SetTrue)]
    pub reverse: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Disable Nerd Font icons
    #[arg(long = "no-icons", action = ArgAction::SetTrue)]
    pub no_icons: bool,

    /// Show inode numbers in the long listing
    #[arg(long = "inodes", action = ArgAction::SetTrue)]
    pub inodes: bool,

    /// Show column headers in the long listing
    #[arg(long = "headers", action = ArgAction::SetTrue)]
    pub headers: bool,

    /// Grid width in columns instead of the terminal width
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// Stop the long listing at the first unreadable symlink instead of skipping it
    #[arg(long = "strict-links", action = ArgAction::SetTrue)]
    pub strict_links: bool,
}

pub fn handle_args() -> Cli {
    Cli::parse()
}
