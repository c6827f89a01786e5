//! Configuration for lsdr.
//!
//! - [general]: hidden files, ordering, tree depth ([General], [MaxDepth]).
//! - [display]: render mode and presentation switches ([Display], [RenderMode], [LinkFailure]).
//! - [load]: the flat [Config] value assembled from the command line.
//!
//! There is no configuration file. The options are immutable once built.

pub mod display;
pub mod general;
pub mod load;

pub use display::{Display, LinkFailure, RenderMode};
pub use general::{General, MaxDepth};
pub use load::Config;
