//! Grid layouts for the short listing modes.
//!
//! Both layouts share `col_width = maxlen + 2` but fill differently:
//! - [ColumnGrid] / [write_down_across]: column-major, entries run top to bottom before
//!   moving to the next column.
//! - [write_horizontal]: row-major, left to right, wrapping when the running line width would
//!   pass the terminal width.
//!
//! Padding is always computed from [Cell::width], the visible width of the name. Escape
//! sequences added by the [Painter] are written around the name and never counted.

use crate::core::style::{DisplayStyle, Painter};

use std::borrow::Cow;
use std::io::{self, Write};

use tracing::trace;
use unicode_width::UnicodeWidthStr;

/// Fixed gap between columns.
pub const COLUMN_SPACING: usize = 2;

/// Width of one grid column for a listing whose longest name is `maxlen` wide. Never 0.
#[inline]
pub fn col_width(maxlen: usize) -> usize {
    (maxlen + COLUMN_SPACING).max(1)
}

/// One name ready for layout.
#[derive(Debug, Clone)]
pub struct Cell<'a> {
    name: Cow<'a, str>,
    width: usize,
    style: DisplayStyle,
}

impl<'a> Cell<'a> {
    pub fn new(name: Cow<'a, str>, width: usize, style: DisplayStyle) -> Self {
        Cell { name, width, style }
    }

    /// Unstyled cell, width measured from the name.
    pub fn plain(name: &'a str) -> Self {
        Cell {
            width: UnicodeWidthStr::width(name),
            name: Cow::Borrowed(name),
            style: DisplayStyle::None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn style(&self) -> DisplayStyle {
        self.style
    }
}

/// Longest visible width among `cells`.
pub fn max_width(cells: &[Cell]) -> usize {
    cells.iter().map(Cell::width).max().unwrap_or(0)
}

/// Down-then-across geometry: which entry index sits at each `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGrid {
    count: usize,
    rows: usize,
    cols: usize,
    col_width: usize,
}

impl ColumnGrid {
    pub fn new(count: usize, maxlen: usize, terminal_width: usize) -> Self {
        let col_width = col_width(maxlen);
        let cols = (terminal_width / col_width).min(count).max(1);
        let rows = count.div_ceil(cols);
        ColumnGrid {
            count,
            rows,
            cols,
            col_width,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn col_width(&self) -> usize {
        self.col_width
    }

    /// Entry index at `(row, col)`, or None for an empty trailing cell.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = col * self.rows + row;
        (idx < self.count).then_some(idx)
    }

    /// Populated entry indices of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter_map(move |col| self.index(row, col))
    }
}

fn write_padding<W: Write>(out: &mut W, pad: usize) -> io::Result<()> {
    if pad > 0 {
        write!(out, "{:pad$}", "", pad = pad)?;
    }
    Ok(())
}

/// Writes `cells` down then across. Every cell but the last one of its row is padded to the
/// column width; the last one is written bare. Empty input writes nothing.
pub fn write_down_across<W: Write>(
    out: &mut W,
    cells: &[Cell],
    terminal_width: usize,
    painter: &Painter,
) -> io::Result<()> {
    let grid = ColumnGrid::new(cells.len(), max_width(cells), terminal_width);
    trace!(
        rows = grid.rows(),
        cols = grid.cols(),
        col_width = grid.col_width(),
        "down-across layout"
    );

    for row in 0..grid.rows() {
        let mut indices = grid.row(row).peekable();
        while let Some(idx) = indices.next() {
            let cell = &cells[idx];
            out.write_all(painter.paint(cell.name(), cell.style()).as_bytes())?;
            if indices.peek().is_some() {
                write_padding(out, grid.col_width().saturating_sub(cell.width()))?;
            }
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `cells` left to right, wrapping before a cell that would pass `terminal_width`.
///
/// A name at least as wide as the terminal gets a line of its own, unpadded. Every other cell
/// is padded to the column width, including the last one on a line. When the column itself is
/// wider than the terminal, every padded cell is preceded by a newline.
pub fn write_horizontal<W: Write>(
    out: &mut W,
    cells: &[Cell],
    terminal_width: usize,
    painter: &Painter,
) -> io::Result<()> {
    let col_width = col_width(max_width(cells));
    trace!(col_width, terminal_width, "horizontal layout");

    let mut current = 0usize;
    for cell in cells {
        if cell.width() >= terminal_width {
            if current != 0 {
                out.write_all(b"\n")?;
                current = 0;
            }
            out.write_all(painter.paint(cell.name(), cell.style()).as_bytes())?;
            out.write_all(b"\n")?;
            continue;
        }

        if current + col_width > terminal_width {
            out.write_all(b"\n")?;
            current = 0;
        }
        out.write_all(painter.paint(cell.name(), cell.style()).as_bytes())?;
        write_padding(out, col_width.saturating_sub(cell.width()))?;
        current += col_width;
    }

    if current != 0 {
        out.write_all(b"\n")?;
    }
    Ok(())
}
