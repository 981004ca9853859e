//! Configuration for lsx.
//!
//! Settings are read from `lsx.toml` (see [Config::default_path]) and split into:
//! - [general]: ordering and terminal fallback width.
//! - [display]: when to colorize.
//! - [theme]: the style used for each [crate::core::DisplayStyle].
//!
//! [load] holds the main [Config] struct and the raw toml form it is built from.

pub mod display;
pub mod general;
pub mod load;
pub mod theme;

pub use display::{ColorMode, Display};
pub use general::{General, InternalGeneral};
pub use load::{Config, RawConfig};
pub use theme::Theme;
