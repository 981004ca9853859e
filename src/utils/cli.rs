//! Command-line argument parsing and help for lsx.
//!
//! `-l` and `-x` pick the display mode; whichever comes last wins, and repeating a flag is
//! harmless. Without either, entries are laid out down then across. Unknown flags print usage to stderr and exit with status 2.

use crate::app::{DisplayMode, ListOptions};
use crate::config::Config;

use clap::Parser;

use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lsx",
    version,
    about = "List directory contents in columns, rows or long format",
    args_override_self = true
)]
struct Cli {
    /// Long listing: permissions, links, owner, group, size, mtime, name
    #[arg(short = 'l', overrides_with = "horizontal")]
    long: bool,

    /// List entries across rows instead of down columns
    #[arg(short = 'x', overrides_with = "long")]
    horizontal: bool,

    /// Generate a default configuration file
    #[arg(long)]
    init: bool,

    /// Display all the configuration options
    #[arg(long)]
    config_help: bool,

    /// Directories to list (defaults to the current directory)
    #[arg(value_name = "DIRECTORY")]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn mode(&self) -> DisplayMode {
        if self.long {
            DisplayMode::Long
        } else if self.horizontal {
            DisplayMode::Horizontal
        } else {
            DisplayMode::Columns
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    List(ListOptions),
    Exit,
}

/// Parses the process arguments. Usage errors, `--help` and `--version` exit the process here.
pub fn handle_args() -> CliAction {
    match parse_args(std::env::args_os()) {
        Ok(action) => action,
        Err(e) => e.exit(),
    }
}

/// Parses `args` (including the program name) into the action to take.
pub fn parse_args<I, T>(args: I) -> Result<CliAction, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    if cli.config_help {
        print_config_help();
        return Ok(CliAction::Exit);
    }

    if cli.init {
        if let Err(e) = Config::generate_default(&Config::default_path()) {
            eprintln!("lsx: {}", e);
        }
        return Ok(CliAction::Exit);
    }

    let mode = cli.mode();
    Ok(CliAction::List(ListOptions::new(mode, cli.paths)))
}

fn print_config_help() {
    let help_text = r##"
lsx - Configuration Guide (lsx.toml)

The config file is read from $LSX_CONFIG, $XDG_CONFIG_HOME/lsx/lsx.toml
or ~/.config/lsx/lsx.toml. Run 'lsx --init' to generate one.

=========================
 General Settings
=========================
[general]
  case_insensitive           Sort names ignoring ASCII case [default: true]
  fallback_width             Columns used when the terminal width is unknown [default: 80]

=========================
 Display Settings
=========================
[display]
  color                      "auto", "always" or "never" [default: "auto"]

=========================
 Theme Configuration
=========================
[theme]
  directory                  Directories [default: "blue"]
  executable                 Files with any execute bit [default: "green"]
  archive                    .tar .tgz .gz .zip .bz2 .xz [default: "red"]
  symlink                    Symbolic links [default: "magenta"]
  special                    Devices, sockets and fifos [default: "reverse"]

  Values: color names ("red", "lightblue", ...), hex "#RRGGBB" or "#RGB",
          "reverse", "bold", or "default" for no decoration.

=========================
 Environment
=========================
  LSX_CONFIG                 Override the config path
  LSX_LOG                    Diagnostic log filter, e.g. "debug" (written to stderr)
"##;

    println!("{}", help_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(args: &[&str]) -> Result<ListOptions, Box<dyn std::error::Error>> {
        match parse_args(args.iter().copied())? {
            CliAction::List(opts) => Ok(opts),
            CliAction::Exit => Err("unexpected exit".into()),
        }
    }

    #[test]
    fn no_flags_is_columns_in_cwd() -> Result<(), Box<dyn std::error::Error>> {
        let opts = list(&["lsx"])?;
        assert_eq!(opts.mode(), DisplayMode::Columns);
        assert!(opts.paths().is_empty());
        Ok(())
    }

    #[test]
    fn last_mode_flag_wins() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(list(&["lsx", "-l"])?.mode(), DisplayMode::Long);
        assert_eq!(list(&["lsx", "-x"])?.mode(), DisplayMode::Horizontal);
        assert_eq!(list(&["lsx", "-l", "-x"])?.mode(), DisplayMode::Horizontal);
        assert_eq!(list(&["lsx", "-x", "-l"])?.mode(), DisplayMode::Long);
        assert_eq!(list(&["lsx", "-xl"])?.mode(), DisplayMode::Long);
        Ok(())
    }

    #[test]
    fn repeated_flags_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(list(&["lsx", "-ll"])?.mode(), DisplayMode::Long);
        assert_eq!(list(&["lsx", "-x", "-x", "dir"])?.paths(), &[PathBuf::from("dir")]);
        Ok(())
    }

    #[test]
    fn paths_keep_their_order() -> Result<(), Box<dyn std::error::Error>> {
        let opts = list(&["lsx", "-l", "b", "a"])?;
        assert_eq!(opts.paths(), &[PathBuf::from("b"), PathBuf::from("a")]);
        Ok(())
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = parse_args(["lsx", "-q"]);
        assert!(err.is_err());
        if let Err(e) = err {
            assert_eq!(e.kind(), clap::error::ErrorKind::UnknownArgument);
            assert_ne!(e.exit_code(), 0);
        }
    }
}
