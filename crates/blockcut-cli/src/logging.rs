use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout only carries the status line. `RUST_LOG`
/// picks the level, defaulting to "warn"; `verbose` forces "debug".
pub fn init(verbose: bool) -> Result<()> {
    let filter_layer = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))
    }
    .map_err(|e| CliError::Logging {
        message: e.to_string(),
    })?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}
