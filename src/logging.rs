use std::io::{self, IsTerminal};

use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global tracing subscriber.
///
/// Events go to stderr so they never mix with table or JSON output on
/// stdout. Colors are only used when stderr is a terminal. An unparseable
/// filter falls back to the default level and is reported once logging is up.
pub fn init(filter: &str) -> Result<()> {
    let (env_filter, rejected) = match EnvFilter::try_new(filter) {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow!("Cannot initialize logging: {}", e))?;

    if let Some(e) = rejected {
        tracing::warn!(filter, error = %e, "invalid log filter, using default");
    }

    Ok(())
}
