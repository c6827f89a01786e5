//! Display configuration options for lsdr
//!
//! This module defines which view is rendered and how it looks: color, icons, the
//! optional long listing columns and the symlink failure policy.

/// The three presentation modes. Exactly one runs per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Grid,
    Detail,
    Tree,
}

/// What the long listing does when a symlink target cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkFailure {
    /// Report the entry and keep rendering the rest.
    #[default]
    Skip,
    /// Report the entry and stop rendering the remaining entries.
    Abort,
}

/// Display configuration options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    mode: RenderMode,
    color: bool,
    icons: bool,
    show_inodes: bool,
    headers: bool,
    width: Option<usize>,
    link_failure: LinkFailure,
}

/// Default display configuration options
impl Default for Display {
    fn default() -> Self {
        Display {
            mode: RenderMode::Grid,
            color: true,
            icons: true,
            show_inodes: false,
            headers: false,
            width: None,
            link_failure: LinkFailure::Skip,
        }
    }
}

impl Display {
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_inodes(mut self, show_inodes: bool) -> Self {
        self.show_inodes = show_inodes;
        self
    }

    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Fixed grid width instead of asking the terminal. Zero is ignored.
    pub fn with_width(mut self, width: Option<usize>) -> Self {
        self.width = width.filter(|w| *w > 0);
        self
    }

    pub fn with_link_failure(mut self, link_failure: LinkFailure) -> Self {
        self.link_failure = link_failure;
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn icons(&self) -> bool {
        self.icons
    }

    pub fn show_inodes(&self) -> bool {
        self.show_inodes
    }

    pub fn headers(&self) -> bool {
        self.headers
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn link_failure(&self) -> LinkFailure {
        self.link_failure
    }
}
