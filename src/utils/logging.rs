//! Diagnostic logging for lsx.
//!
//! Off unless `LSX_LOG` holds a filter (e.g. `LSX_LOG=debug`). Events go to stderr so the
//! listing on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "LSX_LOG";

pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
