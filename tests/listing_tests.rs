//! Listing tests for lsx
//!
//! These tests drive the listing end to end against temporary directories: reading, hidden-file
//! suppression, sorting, the three display modes, colorizing and per-directory error handling.
//! Output and error streams are captured in memory.

use lsx::app::{DisplayMode, Lister};
use lsx::config::Config;
use lsx::core::{self, DisplayStyle, FileKind, ListError, MetadataProvider, Painter};
use std::error;
use std::fs::{self, File};
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn capture(
    config: &Config,
    painter: Painter,
    mode: DisplayMode,
    paths: &[PathBuf],
    width: usize,
) -> Result<(String, String), Box<dyn error::Error>> {
    let lister = Lister::new(config, mode, painter, width);
    let mut out = Vec::new();
    let mut err = Vec::new();
    lister.run(paths, &mut out, &mut err)?;
    Ok((String::from_utf8(out)?, String::from_utf8(err)?))
}

fn touch(dir: &Path, names: &[&str]) -> Result<(), Box<dyn error::Error>> {
    for name in names {
        File::create(dir.join(name))?;
    }
    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[test]
fn hidden_entries_never_appear() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["visible", ".dotfile", ".a", "also_visible"])?;
    fs::create_dir(dir.path().join(".cache"))?;

    let config = Config::default();
    for mode in [
        DisplayMode::Columns,
        DisplayMode::Long,
        DisplayMode::Horizontal,
    ] {
        let (out, _) = capture(
            &config,
            Painter::plain(),
            mode,
            &[dir.path().to_path_buf()],
            80,
        )?;
        assert!(out.contains("visible"), "{mode:?}: {out}");
        assert!(!out.contains(".dotfile"), "{mode:?}: {out}");
        assert!(!out.contains(".cache"), "{mode:?}: {out}");
        assert!(!out.contains(".a"), "{mode:?}: {out}");
    }
    Ok(())
}

#[test]
fn entries_sorted_case_insensitively() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["Cherry", "apple", "Banana"])?;

    let (out, _) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        1,
    )?;
    assert_eq!(out, "apple\nBanana\nCherry\n");
    Ok(())
}

#[test]
fn case_sensitive_order_from_config() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["Cherry", "apple", "Banana"])?;
    let config = Config::from_toml("[general]\ncase_insensitive = false\n")?;

    let (out, _) = capture(
        &config,
        Painter::plain(),
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        1,
    )?;
    assert_eq!(out, "Banana\nCherry\napple\n");
    Ok(())
}

#[test]
fn down_across_example() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["a", "bb", "ccc", "d"])?;
    let (out, _) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        10,
    )?;
    assert_eq!(out, "a    ccc\nbb   d\n");
    Ok(())
}

#[test]
fn horizontal_example() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["a", "bb", "ccc", "d"])?;
    let (out, _) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Horizontal,
        &[dir.path().to_path_buf()],
        10,
    )?;
    assert_eq!(out, "a    bb   \nccc  d    \n");
    Ok(())
}

#[test]
fn long_format_permissions() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("readme");
    File::create(&file)?;
    fs::set_permissions(&file, fs::Permissions::from_mode(0o644))?;
    let sub = dir.path().join("sub");
    fs::create_dir(&sub)?;
    fs::set_permissions(&sub, fs::Permissions::from_mode(0o755))?;

    let (out, err) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Long,
        &[dir.path().to_path_buf()],
        80,
    )?;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 2, "{out}");
    assert!(lines[0].starts_with("-rw-r--r-- "), "{}", lines[0]);
    assert!(lines[0].ends_with(" readme"));
    assert!(lines[1].starts_with("drwxr-xr-x "), "{}", lines[1]);
    assert!(lines[1].ends_with(" sub"));
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn long_format_field_layout() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("data.bin"), vec![0u8; 4096])?;

    let (out, _) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Long,
        &[dir.path().to_path_buf()],
        80,
    )?;
    let line = out.lines().next().ok_or("no output")?;
    // 10 perms, space, 3 links, space
    assert_eq!(&line[10..15], "   1 ");
    let entry = MetadataProvider::new().stat(&dir.path().join("data.bin"))?;
    let expected_tail = format!(
        "{:>8} {} data.bin",
        4096,
        core::format_mtime(entry.modified())
    );
    assert!(line.ends_with(&expected_tail), "{line}");
    Ok(())
}

#[test]
fn symlink_to_executable_is_a_symlink() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let target = dir.path().join("tool");
    File::create(&target)?;
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755))?;
    let link = dir.path().join("tool-link");
    symlink(&target, &link)?;

    let provider = MetadataProvider::new();
    let link_entry = provider.stat(&link)?;
    assert_eq!(link_entry.kind(), FileKind::Symlink);
    assert_eq!(link_entry.style(), DisplayStyle::Symlink);
    assert_eq!(provider.stat(&target)?.style(), DisplayStyle::Executable);
    Ok(())
}

#[test]
fn dangling_symlink_is_still_listed() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    symlink(dir.path().join("gone"), dir.path().join("dangling"))?;

    let (out, err) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Long,
        &[dir.path().to_path_buf()],
        80,
    )?;
    assert!(out.starts_with('l'), "{out}");
    assert!(out.trim_end().ends_with(" dangling"));
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn colorized_columns_keep_plain_alignment() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    touch(dir.path(), &["a", "ccc", "d"])?;
    fs::create_dir(dir.path().join("bb"))?;
    let script = dir.path().join("ccc");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    let config = Config::from_toml("[display]\ncolor = \"always\"\n")?;
    let painter = config.painter(false);
    assert!(painter.is_enabled());

    let (colored, _) = capture(
        &config,
        painter,
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        10,
    )?;
    assert!(colored.contains('\u{1b}'));
    assert_eq!(strip_ansi(&colored), "a    ccc\nbb   d\n");

    let (colored, _) = capture(
        &config,
        painter,
        DisplayMode::Horizontal,
        &[dir.path().to_path_buf()],
        10,
    )?;
    assert_eq!(strip_ansi(&colored), "a    bb   \nccc  d    \n");
    Ok(())
}

#[test]
fn color_never_means_plain_output() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("sub"))?;
    let config = Config::from_toml("[display]\ncolor = \"never\"\n")?;
    let (out, _) = capture(
        &config,
        config.painter(true),
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        80,
    )?;
    assert_eq!(out, "sub\n");
    Ok(())
}

#[test]
fn unopenable_directory_reports_once_and_continues() -> Result<(), Box<dyn error::Error>> {
    let first = tempdir()?;
    let last = tempdir()?;
    touch(first.path(), &["one"])?;
    touch(last.path(), &["two"])?;
    let missing = first.path().join("no-such-dir");

    let paths = vec![
        first.path().to_path_buf(),
        missing.clone(),
        last.path().to_path_buf(),
    ];
    let (out, err) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Columns,
        &paths,
        80,
    )?;

    let expected = format!(
        "Directory listing of {}:\none\n\nDirectory listing of {}:\n\nDirectory listing of {}:\ntwo\n",
        first.path().display(),
        missing.display(),
        last.path().display()
    );
    assert_eq!(out, expected);
    assert_eq!(err.lines().count(), 1, "{err}");
    assert!(err.contains("no-such-dir"));
    Ok(())
}

#[test]
fn empty_directory_no_output_no_error() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let (out, err) = capture(
        &Config::default(),
        Painter::plain(),
        DisplayMode::Columns,
        &[dir.path().to_path_buf()],
        80,
    )?;
    assert!(out.is_empty());
    assert!(err.is_empty());
    Ok(())
}

#[test]
fn list_visible_reports_open_failure() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing");
    match core::list_visible(&missing) {
        Err(ListError::CannotOpenDirectory { path, .. }) => assert_eq!(path, missing),
        other => return Err(format!("unexpected result: {:?}", other).into()),
    }
    Ok(())
}

#[test]
fn unsearchable_directory_lists_names_without_metadata() -> Result<(), Box<dyn error::Error>> {
    // root can stat regardless of permissions
    if uzers::get_current_uid() == 0 {
        return Ok(());
    }
    let dir = tempdir()?;
    let locked = dir.path().join("locked");
    fs::create_dir(&locked)?;
    touch(&locked, &["a", "bb"])?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o600))?;

    let config = Config::from_toml("[display]\ncolor = \"always\"\n")?;
    let long = capture(
        &config,
        config.painter(false),
        DisplayMode::Long,
        &[locked.clone()],
        80,
    );
    let grid = capture(
        &config,
        config.painter(false),
        DisplayMode::Columns,
        &[locked.clone()],
        80,
    );
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    let (out, err) = long?;
    assert!(out.is_empty(), "{out}");
    assert_eq!(err.lines().count(), 2, "{err}");
    assert!(err.lines().all(|l| l.starts_with("lsx: cannot access")));

    let (out, err) = grid?;
    assert_eq!(out, "a   bb\n");
    assert!(err.is_empty(), "{err}");
    Ok(())
}
