//! The listing driver of lsx.
//!
//! [Lister] processes directory arguments one at a time: read the visible names, sort them,
//! then hand them to the long formatter or to one of the grid layouts. Each directory is
//! flushed before the next one is opened. Failures are written to the error stream and never
//! stop the remaining arguments.

use crate::config::Config;
use crate::core::{
    Cell, DirListing, DisplayStyle, EntryName, MetadataLookup, MetadataProvider, Painter,
    format_long_line, list_visible, sort_names, write_down_across, write_horizontal,
};

use tracing::debug;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How a directory is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Down-then-across columns.
    #[default]
    Columns,
    /// One line of metadata per entry (`-l`).
    Long,
    /// Row-major columns (`-x`).
    Horizontal,
}

/// What the command line asked to list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    mode: DisplayMode,
    paths: Vec<PathBuf>,
}

impl ListOptions {
    pub fn new(mode: DisplayMode, paths: Vec<PathBuf>) -> Self {
        ListOptions { mode, paths }
    }

    #[inline]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Directory arguments; empty means the current directory.
    #[inline]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Lists directories. `M` supplies per-entry metadata; [MetadataProvider] outside of tests.
pub struct Lister<'a, M = MetadataProvider> {
    mode: DisplayMode,
    case_insensitive: bool,
    terminal_width: usize,
    painter: Painter<'a>,
    metadata: M,
}

impl<'a> Lister<'a> {
    pub fn new(
        config: &Config,
        mode: DisplayMode,
        painter: Painter<'a>,
        terminal_width: usize,
    ) -> Self {
        Lister {
            mode,
            case_insensitive: config.general().case_insensitive(),
            terminal_width: terminal_width.max(1),
            painter,
            metadata: MetadataProvider::new(),
        }
    }
}

impl<'a, M: MetadataLookup> Lister<'a, M> {
    /// Replaces the metadata source.
    pub fn with_metadata<N: MetadataLookup>(self, metadata: N) -> Lister<'a, N> {
        Lister {
            mode: self.mode,
            case_insensitive: self.case_insensitive,
            terminal_width: self.terminal_width,
            painter: self.painter,
            metadata,
        }
    }

    /// Lists every path in order. With no paths the current directory is listed.
    ///
    /// More than one path puts a `Directory listing of <path>:` header above each block and a
    /// blank line between blocks.
    pub fn run<W: Write, E: Write>(
        &self,
        paths: &[PathBuf],
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        if paths.is_empty() {
            return self.list_dir(Path::new("."), out, err);
        }

        let with_headers = paths.len() > 1;
        for (i, path) in paths.iter().enumerate() {
            if with_headers {
                writeln!(out, "Directory listing of {}:", path.display())?;
            }
            self.list_dir(path, out, err)?;
            if with_headers && i + 1 < paths.len() {
                writeln!(out)?;
            }
        }
        out.flush()
    }

    /// Lists one directory. Open failures are reported on `err` and yield no output.
    pub fn list_dir<W: Write, E: Write>(
        &self,
        path: &Path,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        let listing = match list_visible(path) {
            Ok(listing) => listing,
            Err(e) => {
                out.flush()?;
                writeln!(err, "lsx: {}", e)?;
                return Ok(());
            }
        };
        self.write_listing(path, listing, out, err)
    }

    /// Reports a partial read, then sorts and renders what was read.
    fn write_listing<W: Write, E: Write>(
        &self,
        path: &Path,
        mut listing: DirListing,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        if let Some(e) = listing.take_read_error() {
            out.flush()?;
            if e.is_partial() {
                writeln!(err, "lsx: warning: {}", e)?;
            } else {
                writeln!(err, "lsx: {}", e)?;
            }
        }

        if listing.is_empty() {
            return Ok(());
        }

        sort_names(listing.entries_mut(), self.case_insensitive);
        debug!(
            path = %path.display(),
            mode = ?self.mode,
            count = listing.entries().len(),
            width = self.terminal_width,
            "listing"
        );

        match self.mode {
            DisplayMode::Long => self.write_long(path, listing.entries(), out, err)?,
            DisplayMode::Columns => {
                let cells = self.cells(path, listing.entries());
                write_down_across(out, &cells, self.terminal_width, &self.painter)?;
            }
            DisplayMode::Horizontal => {
                let cells = self.cells(path, listing.entries());
                write_horizontal(out, &cells, self.terminal_width, &self.painter)?;
            }
        }
        out.flush()
    }

    fn write_long<W: Write, E: Write>(
        &self,
        dir: &Path,
        entries: &[EntryName],
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        for name in entries {
            match self.metadata.stat(&dir.join(name.name())) {
                Ok(entry) => writeln!(out, "{}", format_long_line(&entry, &self.painter))?,
                Err(e) => {
                    out.flush()?;
                    writeln!(err, "lsx: {}", e)?;
                }
            }
        }
        Ok(())
    }

    /// Builds layout cells. Entries are only classified when the painter will use the style;
    /// a failed lookup leaves that name undecorated.
    fn cells<'e>(&self, dir: &Path, entries: &'e [EntryName]) -> Vec<Cell<'e>> {
        entries
            .iter()
            .map(|name| {
                let style = if self.painter.is_enabled() {
                    match self.metadata.stat(&dir.join(name.name())) {
                        Ok(entry) => entry.style(),
                        Err(e) => {
                            debug!(%e, "unclassified entry");
                            DisplayStyle::None
                        }
                    }
                } else {
                    DisplayStyle::None
                };
                Cell::new(name.name_str(), name.width(), style)
            })
            .collect()
    }
}
