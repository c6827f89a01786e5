//! Miscellaneous utility functions for lsdr.
//!
//! - [cli]: command-line flag parsing.
//! - [helpers]: color parsing, home directory expansion and path labels.

pub mod cli;
pub mod helpers;

pub use helpers::{dir_label, expand_home_path, get_home, parse_color, resolve_target_dir};
