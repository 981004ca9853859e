//! Error types for lsx.
//!
//! Directory-level errors abort only the listing of that directory, entry-level errors only
//! that entry's line. [ListError::UnknownOwnerOrGroup] never reaches the user: callers
//! substitute a placeholder name.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

/// Which id space a failed name lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Group,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdKind::User => f.write_str("user"),
            IdKind::Group => f.write_str("group"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("cannot open directory '{}': {source}", path.display())]
    CannotOpenDirectory { path: PathBuf, source: io::Error },

    #[error("error reading directory '{}': {source}", path.display())]
    DirectoryReadFailure { path: PathBuf, source: io::Error },

    #[error("cannot access '{}': {source}", path.display())]
    StatFailed { path: PathBuf, source: io::Error },

    #[error("no {kind} name for id {id}")]
    UnknownOwnerOrGroup { kind: IdKind, id: u32 },

    #[error("out of memory while reading directory '{}'", path.display())]
    BufferExhausted { path: PathBuf },
}

impl ListError {
    /// True for failures that still leave a usable (possibly partial) listing behind.
    pub fn is_partial(&self) -> bool {
        matches!(self, ListError::DirectoryReadFailure { .. })
    }
}
