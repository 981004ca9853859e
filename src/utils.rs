//! Miscellaneous utility functions for lsx.
//!
//! - [cli]: command-line parsing into a [cli::CliAction].
//! - [helpers]: color parsing, home directory lookup, ASCII lowercasing, width clamping.
//! - [logging]: tracing subscriber setup.

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{clamp_fallback_width, get_home, parse_color, parse_style, with_lowered_stack};
pub use logging::init_logging;
