//! Diagnostic logging setup for the `parlor` binary.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PARLOR_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `PARLOR_LOG`.
///
/// Game text is written to stdout by the commands, so logs never interleave
/// with prompts unless stderr and stdout share a terminal. Calling this twice
/// is harmless; the second install is ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
