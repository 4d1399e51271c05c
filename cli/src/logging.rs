//! tracing subscriber setup. Logs go to stderr; stdout carries only tool output.

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `RLE_LOG=debug`.
pub const LOG_ENV: &str = "RLE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init() -> anyhow::Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {LOG_ENV} filter: {directives}"))?,
        Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("cannot install log subscriber: {e}"))
}
