//! Theme configuration options for lsx.
//!
//! Each field maps one [DisplayStyle] to a terminal style. Values are color names
//! ("blue", "lightred", ...), hex codes ("#RRGGBB" or "#RGB"), "reverse", "bold", or
//! "default" to leave that kind of entry undecorated.
//!
//! # Examples
//! ```toml
//! [theme]
//! directory = "#5f87ff"
//! archive = "lightred"
//! special = "reverse"
//! ```

use crate::core::DisplayStyle;
use crate::utils::parse_style;

use crossterm::style::{Attribute, Color, ContentStyle};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_style_field")]
    directory: ContentStyle,
    #[serde(deserialize_with = "deserialize_style_field")]
    executable: ContentStyle,
    #[serde(deserialize_with = "deserialize_style_field")]
    archive: ContentStyle,
    #[serde(deserialize_with = "deserialize_style_field")]
    symlink: ContentStyle,
    #[serde(deserialize_with = "deserialize_style_field")]
    special: ContentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            directory: fg(Color::DarkBlue),
            executable: fg(Color::DarkGreen),
            archive: fg(Color::DarkRed),
            symlink: fg(Color::DarkMagenta),
            special: ContentStyle {
                attributes: Attribute::Reverse.into(),
                ..ContentStyle::default()
            },
        }
    }
}

impl Theme {
    /// The terminal style for `style`, or None when nothing should be emitted.
    pub fn content_style(&self, style: DisplayStyle) -> Option<ContentStyle> {
        let content_style = match style {
            DisplayStyle::None => return None,
            DisplayStyle::Directory => self.directory,
            DisplayStyle::Executable => self.executable,
            DisplayStyle::Archive => self.archive,
            DisplayStyle::Symlink => self.symlink,
            DisplayStyle::Special => self.special,
        };
        (content_style != ContentStyle::default()).then_some(content_style)
    }
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn deserialize_style_field<'de, D>(deserializer: D) -> Result<ContentStyle, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_style(&s))
}
