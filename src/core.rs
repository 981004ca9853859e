//! Core listing logic for lsx.
//!
//! This module contains the pieces the listing driver in [crate::app] is built from:
//! - [fm]: directory reading and no-follow metadata (see [list_visible], [MetadataProvider], [Entry]).
//! - [formatter]: name ordering, permission strings, timestamps and long-format lines.
//! - [layout]: the down-then-across grid and the row-major layout.
//! - [style]: color classification and the [Painter] that decorates names.
//! - [terminal]: terminal width lookup.
//! - [errors]: the [ListError] taxonomy.

pub mod errors;
pub mod fm;
pub mod formatter;
pub mod layout;
pub mod style;
pub mod terminal;

pub use errors::{IdKind, ListError};
pub use fm::{
    DirListing, Entry, EntryName, FileKind, MetadataLookup, MetadataProvider, UNKNOWN_NAME,
    list_visible,
};
pub use formatter::{format_long_line, format_mtime, format_permissions, sort_names};
pub use layout::{Cell, ColumnGrid, col_width, write_down_across, write_horizontal};
pub use style::{DisplayStyle, Painter, classify, is_archive_name};
pub use terminal::{DEFAULT_WIDTH, stdout_is_terminal, terminal_width};
