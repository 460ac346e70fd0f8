//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the tree on stdout. The
//! filter is read from `TWIG_LOG` (same syntax as `RUST_LOG`) and defaults
//! to `warn`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TWIG_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Build the log filter from the environment, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
