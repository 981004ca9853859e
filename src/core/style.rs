//! Color classification of directory entries.
//!
//! [classify] is a pure function of kind, permission bits and name. [Painter] turns the
//! resulting [DisplayStyle] into escape sequences around the name. Painting never changes how
//! wide a cell is: layout code pads with the visible name width only.

use crate::config::Theme;
use crate::core::fm::FileKind;
use crate::utils::with_lowered_stack;

use phf::phf_set;
use std::borrow::Cow;

/// Final extensions that mark an archive. `.tar.gz` is covered by `gz`.
static ARCHIVE_EXTS: phf::Set<&'static str> = phf_set! {
    "tar",
    "tgz",
    "gz",
    "zip",
    "bz2",
    "xz",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    None,
    Directory,
    Executable,
    Archive,
    Symlink,
    Special,
}

/// Classifies an entry. First match wins:
/// symlink, directory, special node, archive name, any execute bit.
pub fn classify(kind: FileKind, mode: u32, name: &str) -> DisplayStyle {
    match kind {
        FileKind::Symlink => DisplayStyle::Symlink,
        FileKind::Directory => DisplayStyle::Directory,
        k if k.is_special() => DisplayStyle::Special,
        _ if is_archive_name(name) => DisplayStyle::Archive,
        _ if mode & 0o111 != 0 => DisplayStyle::Executable,
        _ => DisplayStyle::None,
    }
}

/// Case-insensitive match against the known archive suffixes.
pub fn is_archive_name(name: &str) -> bool {
    let Some(dot_idx) = name.rfind('.') else {
        return false;
    };
    let ext = &name[dot_idx + 1..];
    if ext.is_empty() {
        return false;
    }
    if ARCHIVE_EXTS.contains(ext) {
        return true;
    }
    with_lowered_stack(ext, |s| ARCHIVE_EXTS.contains(s))
}

/// Wraps names in the escape sequences of a [Theme], or leaves them alone.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: Option<&'a Theme>,
}

impl<'a> Painter<'a> {
    pub fn plain() -> Self {
        Painter { theme: None }
    }

    pub fn themed(theme: &'a Theme) -> Self {
        Painter { theme: Some(theme) }
    }

    /// Whether entries need to be classified at all.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.theme.is_some()
    }

    pub fn paint<'n>(&self, name: &'n str, style: DisplayStyle) -> Cow<'n, str> {
        let Some(theme) = self.theme else {
            return Cow::Borrowed(name);
        };
        match theme.content_style(style) {
            Some(content_style) => Cow::Owned(content_style.apply(name).to_string()),
            None => Cow::Borrowed(name),
        }
    }
}
