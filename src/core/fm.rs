//! Directory reading and file metadata for lsx.
//!
//! [list_visible] yields the visible names of one directory in arrival order.
//! [MetadataProvider] turns a path into an [Entry], the stat-like record used by the long
//! listing and by color classification. Symlinks are never followed.

use crate::core::errors::{IdKind, ListError, Result};
use crate::core::style::{DisplayStyle, classify};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, symlink_metadata};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;
use uzers::{Groups, Users, UsersCache};

/// Name shown in place of an owner or group that has no entry in the user/group database.
pub const UNKNOWN_NAME: &str = "unknown";

/// The kind of a directory member, as reported by a no-follow stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Socket,
    Fifo,
}

impl FileKind {
    pub fn from_file_type(ft: &fs::FileType) -> Self {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_socket() {
            FileKind::Socket
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else {
            FileKind::Regular
        }
    }

    /// Leading character of the permission string.
    pub fn indicator(self) -> char {
        match self {
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::CharDevice => 'c',
            FileKind::BlockDevice => 'b',
            FileKind::Socket => 's',
            FileKind::Fifo => 'p',
            FileKind::Regular => '-',
        }
    }

    /// Character, block, socket and fifo nodes.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            FileKind::CharDevice | FileKind::BlockDevice | FileKind::Socket | FileKind::Fifo
        )
    }
}

/// A single visible name read from a directory.
#[derive(Debug, Clone)]
pub struct EntryName {
    name: Box<OsStr>,
    width: usize,
}

impl EntryName {
    pub fn new(name: OsString) -> Self {
        let width = UnicodeWidthStr::width(name.to_string_lossy().as_ref());
        EntryName {
            name: name.into_boxed_os_str(),
            width,
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Raw bytes of the name, used for ordering.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Terminal columns the name occupies when printed.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl From<&str> for EntryName {
    fn from(name: &str) -> Self {
        EntryName::new(OsString::from(name))
    }
}

/// Names starting with a dot are hidden.
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

/// The visible names of one directory.
///
/// `read_error` is set when iteration stopped early; `entries` then holds whatever was read
/// before the failure and is still fit for display.
#[derive(Debug)]
pub struct DirListing {
    pub(crate) entries: Vec<EntryName>,
    pub(crate) read_error: Option<ListError>,
}

impl DirListing {
    #[inline]
    pub fn entries(&self) -> &[EntryName] {
        &self.entries
    }

    #[inline]
    pub fn entries_mut(&mut self) -> &mut [EntryName] {
        &mut self.entries
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn take_read_error(&mut self) -> Option<ListError> {
        self.read_error.take()
    }
}

/// Reads the visible names of `path` in the order the directory yields them.
///
/// # Returns
/// [ListError::CannotOpenDirectory] when `path` cannot be opened as a directory and
/// [ListError::BufferExhausted] when the name buffer cannot grow. A failure midway through the
/// iteration is reported through [DirListing::take_read_error] instead.
pub fn list_visible(path: &Path) -> Result<DirListing> {
    let iter = fs::read_dir(path).map_err(|source| ListError::CannotOpenDirectory {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<EntryName> = Vec::new();
    let mut read_error = None;

    for entry in iter {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                read_error = Some(ListError::DirectoryReadFailure {
                    path: path.to_path_buf(),
                    source,
                });
                break;
            }
        };

        let name = entry.file_name();
        if is_hidden(&name) {
            continue;
        }

        if entries.try_reserve(1).is_err() {
            return Err(ListError::BufferExhausted {
                path: path.to_path_buf(),
            });
        }
        entries.push(EntryName::new(name));
    }

    debug!(
        path = %path.display(),
        count = entries.len(),
        partial = read_error.is_some(),
        "read directory"
    );
    Ok(DirListing {
        entries,
        read_error,
    })
}

/// The stat-like record of one directory member.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub(crate) name: OsString,
    pub(crate) kind: FileKind,
    pub(crate) mode: u32,
    pub(crate) nlink: u64,
    pub(crate) owner: String,
    pub(crate) group: String,
    pub(crate) size: u64,
    pub(crate) modified: SystemTime,
}

impl Entry {
    /// Any of the user, group or other execute bits.
    pub const EXEC_BITS: u32 = 0o111;

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Permission bits including the setuid, setgid and sticky bits.
    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode & 0o7777
    }

    #[inline]
    pub fn nlink(&self) -> u64 {
        self.nlink
    }

    #[inline]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & Self::EXEC_BITS != 0
    }

    pub fn style(&self) -> DisplayStyle {
        classify(self.kind, self.mode, &self.name_str())
    }
}

/// Source of [Entry] records for the listing driver.
pub trait MetadataLookup {
    /// No-follow stat of `path`.
    fn stat(&self, path: &Path) -> Result<Entry>;
}

/// Looks up [Entry] records. Owner and group names are cached for the lifetime of the provider.
pub struct MetadataProvider {
    users: UsersCache,
}

impl MetadataProvider {
    pub fn new() -> Self {
        MetadataProvider {
            users: UsersCache::new(),
        }
    }

    /// No-follow stat of `path`.
    ///
    /// Unknown owner or group ids fall back to [UNKNOWN_NAME] instead of failing the record.
    pub fn stat(&self, path: &Path) -> Result<Entry> {
        let meta = symlink_metadata(path).map_err(|source| ListError::StatFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());

        Ok(Entry {
            name,
            kind: FileKind::from_file_type(&meta.file_type()),
            mode: meta.mode(),
            nlink: meta.nlink(),
            owner: or_unknown(self.user_name(meta.uid())),
            group: or_unknown(self.group_name(meta.gid())),
            size: meta.size(),
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
        })
    }

    pub fn user_name(&self, uid: u32) -> Result<String> {
        self.users
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .ok_or(ListError::UnknownOwnerOrGroup {
                kind: IdKind::User,
                id: uid,
            })
    }

    pub fn group_name(&self, gid: u32) -> Result<String> {
        self.users
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .ok_or(ListError::UnknownOwnerOrGroup {
                kind: IdKind::Group,
                id: gid,
            })
    }
}

impl MetadataLookup for MetadataProvider {
    fn stat(&self, path: &Path) -> Result<Entry> {
        MetadataProvider::stat(self, path)
    }
}

impl Default for MetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves an id lookup to its name or the placeholder.
pub fn or_unknown(lookup: Result<String>) -> String {
    lookup.unwrap_or_else(|e| {
        trace!(%e, "using placeholder name");
        UNKNOWN_NAME.to_string()
    })
}
