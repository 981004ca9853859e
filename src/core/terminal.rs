//! Terminal queries for lsx.
//!
//! The width is read from the terminal attached to stdout. When stdout is not a terminal, or
//! the terminal reports zero columns, the configured fallback is used.

use crossterm::tty::IsTty;
use tracing::debug;

use std::io;

/// Width used when the terminal cannot tell us.
pub const DEFAULT_WIDTH: usize = 80;

/// Columns available on stdout, or `fallback` (at least 1).
pub fn terminal_width(fallback: usize) -> usize {
    if !stdout_is_terminal() {
        return fallback.max(1);
    }
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => usize::from(cols),
        Ok(_) => fallback.max(1),
        Err(e) => {
            debug!(%e, fallback, "terminal size unavailable");
            fallback.max(1)
        }
    }
}

/// Whether stdout is attached to a terminal.
pub fn stdout_is_terminal() -> bool {
    io::stdout().is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_never_zero() {
        assert!(terminal_width(0) >= 1);
        assert!(terminal_width(DEFAULT_WIDTH) >= 1);
    }
}
