//! Tracing subscriber setup
//!
//! Filter precedence: `SCOV_LOG`, then `RUST_LOG`, then the config filter.
//! Logs go to stderr so reports on stdout stay machine-readable.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SCOV_LOG";

/// Build the filter for the given config
///
/// # Errors
/// Returns error when the config filter directive is malformed
pub fn env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(&config.filter)?)
}

/// Install the global subscriber
///
/// # Errors
/// Returns error if the filter is invalid or a subscriber is already set
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
    .map_err(|e| anyhow::anyhow!(e))
}
