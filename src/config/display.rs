//! Display configuration options for lsx.

use serde::Deserialize;

/// When names get colorized.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => stdout_is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The `[display]` table.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Display {
    color: ColorMode,
}

impl Display {
    pub fn color(&self) -> ColorMode {
        self.color
    }
}
