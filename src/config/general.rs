//! The general listing settings for lsdr.
//!
//! This module defines the [General] struct: which entries are shown, how they are
//! ordered and how deep the tree view descends. It also holds [MaxDepth] and the
//! per-mode sort policy table.

use crate::config::RenderMode;
use crate::core::Formatter;

/// How deep the tree view descends below the root.
///
/// The command line uses `-1` for [MaxDepth::Unlimited].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    Unlimited,
    Limited(usize),
}

impl MaxDepth {
    /// Maps the command line value: `-1` is unlimited, anything else below zero is rejected.
    pub fn from_flag(value: i64) -> Option<Self> {
        match value {
            -1 => Some(MaxDepth::Unlimited),
            v if v >= 0 => usize::try_from(v).ok().map(MaxDepth::Limited),
            _ => None,
        }
    }

    /// True if a directory read at `depth` is allowed.
    #[inline]
    pub fn allows(&self, depth: usize) -> bool {
        match self {
            MaxDepth::Unlimited => true,
            MaxDepth::Limited(max) => depth <= *max,
        }
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        MaxDepth::Limited(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct General {
    show_hidden: bool,
    dirs_first: bool,
    reverse: bool,
    max_depth: MaxDepth,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            dirs_first: true,
            reverse: false,
            max_depth: MaxDepth::default(),
        }
    }
}

impl General {
    pub fn new(show_hidden: bool, dirs_first: bool, reverse: bool, max_depth: MaxDepth) -> Self {
        General {
            show_hidden,
            dirs_first,
            reverse,
            max_depth,
        }
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    /// Sort policy per render mode.
    ///
    /// | mode   | dirs_first | reverse |
    /// |--------|------------|---------|
    /// | grid   | honored    | honored |
    /// | detail | honored    | honored |
    /// | tree   | ignored    | ignored |
    pub fn formatter_for(&self, mode: RenderMode) -> Formatter {
        match mode {
            RenderMode::Grid | RenderMode::Detail => {
                Formatter::new(self.dirs_first, self.reverse, self.show_hidden)
            }
            RenderMode::Tree => Formatter::name_only(self.show_hidden),
        }
    }
}
