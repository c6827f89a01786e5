//! Rendering for lsdr.
//!
//! - [grid]: the multi-column default view ([GridLayout]).
//! - [detail]: the long listing ([DetailFormatter]).
//! - [tree]: the recursive tree view ([TreeWalker]).
//! - [icons]: Nerd Font glyphs and their colors.
//! - [paint]: ANSI coloring ([Painter]).
//!
//! Every renderer builds a complete `String`; nothing here writes to stdout.

pub mod detail;
pub mod grid;
pub mod icons;
pub mod paint;
pub mod tree;

pub use detail::DetailFormatter;
pub use grid::{COLUMN_SPACING, ColumnGrid, GridLayout, GridShape};
pub use icons::{Icon, icon_for, icon_lookup};
pub use paint::Painter;
pub use tree::TreeWalker;
