//! The main config loading module for lsx.
//!
//! Handles loading and deserializing settings from `lsx.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! A missing file means internal defaults; a broken one is reported once and ignored.

use crate::config::{ColorMode, Display, General, InternalGeneral, Theme};
use crate::core::Painter;
use crate::utils::get_home;

use crossterm::style::force_color_output;
use serde::Deserialize;
use tracing::debug;

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "LSX_CONFIG";

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct, which validates a few values.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
}

/// Main configuration struct for lsx.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    theme: Theme,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            theme: raw.theme,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// Falls back to the defaults when the file is missing or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    config
                }
                Err(e) => {
                    eprintln!("lsx: error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("lsx: cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The painter for this run: themed when the color mode allows it, plain otherwise.
    pub fn painter(&self, stdout_is_terminal: bool) -> Painter<'_> {
        let mode = self.display.color();
        if !mode.enabled(stdout_is_terminal) {
            return Painter::plain();
        }
        if mode == ColorMode::Always {
            // overrides NO_COLOR
            force_color_output(true);
        }
        Painter::themed(&self.theme)
    }

    /// Determine the default configuration file path.
    /// Checks the LSX_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/lsx/lsx.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lsx/lsx.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/lsx/lsx.toml");
        }
        PathBuf::from("lsx.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# lsx.toml - default configuration for lsx
#
# Commented values are the internal defaults.
# Colors: names ("blue", "lightred", ...), hex ("#RRGGBB"), "reverse", "bold" or "default".

[general]
# case_insensitive = true
# fallback_width = 80

[display]
# color = "auto"        # "auto", "always" or "never"

[theme]
# directory = "blue"
# executable = "green"
# archive = "red"
# symlink = "magenta"
# special = "reverse"
"##;
