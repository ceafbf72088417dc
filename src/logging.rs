//! Diagnostic logging setup for the `pman` binary.
//!
//! Library code emits `tracing` events; only the binary installs a
//! subscriber.  Logs go to stderr so command output stays pipeable.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter (e.g. `pman=debug`).
pub const LOG_ENV: &str = "PMAN_LOG";

/// Install the global subscriber.
///
/// `PMAN_LOG` wins if set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.  Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Already installed (tests, repeated init); keep the first one.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
