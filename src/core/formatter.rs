//! Sorting and long-format rendering for lsx.
//!
//! Holds the name ordering used by every display mode, the `drwxr-xr-x` permission string,
//! the fixed timestamp format and the single-line long listing built from an [Entry].

use crate::core::fm::{Entry, EntryName, FileKind};
use crate::core::style::Painter;

use chrono::{DateTime, Local, TimeZone, Utc};

use std::cmp::Ordering;
use std::fmt;
use std::time::SystemTime;

/// Abbreviated month, zero-padded day, 24-hour clock.
pub const TIME_FORMAT: &str = "%b %d %H:%M";

/// Byte-wise comparison with ASCII letters folded to lowercase.
pub fn cmp_ignore_ascii_case(a: &[u8], b: &[u8]) -> Ordering {
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
}

/// Sorts names in place. Names equal under case folding end up in unspecified order.
pub fn sort_names(entries: &mut [EntryName], case_insensitive: bool) {
    if case_insensitive {
        entries.sort_unstable_by(|a, b| cmp_ignore_ascii_case(a.as_bytes(), b.as_bytes()));
    } else {
        entries.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    }
}

/// Formats the kind and permission bits in the unix `-rwxr-xr-x` form.
///
/// Only the nine rwx bits are shown; setuid, setgid and sticky do not alter the string.
pub fn format_permissions(kind: FileKind, mode: u32) -> String {
    let mut chars = [kind.indicator(), '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats a modification time in the local timezone.
pub fn format_mtime(modified: SystemTime) -> String {
    format_mtime_in(modified, &Local)
}

pub fn format_mtime_in<Tz: TimeZone>(modified: SystemTime, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let dt: DateTime<Utc> = DateTime::from(modified);
    dt.with_timezone(tz).format(TIME_FORMAT).to_string()
}

/// Renders one long-format line (without the trailing newline):
/// permissions, link count, owner, group, size, mtime, name.
pub fn format_long_line(entry: &Entry, painter: &Painter) -> String {
    format_long_line_in(entry, painter, &Local)
}

pub fn format_long_line_in<Tz: TimeZone>(entry: &Entry, painter: &Painter, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    let name = entry.name_str();
    let shown = painter.paint(&name, entry.style());
    format!(
        "{} {:>3} {:<8} {:<8} {:>8} {} {}",
        format_permissions(entry.kind(), entry.mode()),
        entry.nlink(),
        entry.owner(),
        entry.group(),
        entry.size(),
        format_mtime_in(entry.modified(), tz),
        shown
    )
}
