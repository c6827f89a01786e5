//! Multi-column grid view.
//!
//! Entries are packed column-major into as many columns as the terminal width allows
//! and read back row-major. Column width comes from display width, so names with
//! double-width glyphs line up with plain ones.

use crate::core::{FileEntry, display_width};
use crate::ui::icons::Icon;
use crate::ui::paint::Painter;

/// Spaces between two grid columns.
pub const COLUMN_SPACING: usize = 2;

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    plain: String,
    painted: String,
    visual: usize,
}

impl Cell {
    /// Icon plus name without color.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Display width of the plain text.
    pub fn visual(&self) -> usize {
        self.visual
    }
}

/// Columns and rows chosen for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub num_columns: usize,
    pub rows_per_column: usize,
}

/// Cells split into columns, filled column-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGrid {
    columns: Vec<Vec<Cell>>,
    spacing: usize,
}

impl ColumnGrid {
    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Reads the grid row-major. Every cell is padded to the widest member of its
    /// own column, and cells are joined by the column spacing. Columns shorter than
    /// the first simply contribute nothing to the missing rows.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| col.iter().map(Cell::visual).max().unwrap_or(0))
            .collect();
        let gap = " ".repeat(self.spacing);

        let mut out = String::new();
        for row in 0..self.rows() {
            let mut first = true;
            for (col, width) in self.columns.iter().zip(&widths) {
                let Some(cell) = col.get(row) else {
                    continue;
                };
                if !first {
                    out.push_str(&gap);
                }
                first = false;
                out.push_str(&cell.painted);
                out.push_str(&" ".repeat(width - cell.visual));
            }
            out.push('\n');
        }
        out
    }
}

/// Packs entries into a grid sized to the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    terminal_width: usize,
    spacing: usize,
}

impl GridLayout {
    pub fn new(terminal_width: usize) -> Self {
        GridLayout {
            terminal_width: terminal_width.max(1),
            spacing: COLUMN_SPACING,
        }
    }

    /// Picks the column count and rows per column for the given visual widths.
    ///
    /// The column count is clamped to at least one, so a name wider than the
    /// terminal ends up alone on its line instead of dividing by zero.
    pub fn shape(&self, widths: &[usize]) -> GridShape {
        let max_visual = widths.iter().copied().max().unwrap_or(0);
        let column_width = max_visual + self.spacing;
        let num_columns = (self.terminal_width / column_width).max(1);
        GridShape {
            num_columns,
            rows_per_column: widths.len().div_ceil(num_columns),
        }
    }

    /// Builds the column-major grid. `entries` must already be filtered and sorted.
    pub fn build<F>(&self, entries: &[FileEntry], icon_for: F, painter: &Painter) -> ColumnGrid
    where
        F: Fn(&FileEntry) -> Icon,
    {
        let cells: Vec<Cell> = entries
            .iter()
            .map(|entry| {
                let icon = icon_for(entry);
                let mut plain = String::with_capacity(icon.glyph.len() + entry.name().len());
                plain.push_str(icon.glyph);
                plain.push_str(entry.name());
                Cell {
                    visual: display_width(icon.glyph) + display_width(entry.name()),
                    painted: painter.paint(&plain, icon.color),
                    plain,
                }
            })
            .collect();

        if cells.is_empty() {
            return ColumnGrid {
                columns: Vec::new(),
                spacing: self.spacing,
            };
        }

        let widths: Vec<usize> = cells.iter().map(Cell::visual).collect();
        let shape = self.shape(&widths);

        let columns = cells
            .chunks(shape.rows_per_column)
            .map(<[Cell]>::to_vec)
            .collect();

        ColumnGrid {
            columns,
            spacing: self.spacing,
        }
    }

    /// Builds and renders in one go.
    pub fn render<F>(&self, entries: &[FileEntry], icon_for: F, painter: &Painter) -> String
    where
        F: Fn(&FileEntry) -> Icon,
    {
        self.build(entries, icon_for, painter).render()
    }
}
