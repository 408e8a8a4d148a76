//! Tracing subscriber setup.

use crate::error::CliError;
use auction_model_config::{LogConfig, LogFormat};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Events go to stderr so stdout stays a clean report.
pub fn init_logging(config: &LogConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(&config.filter).map_err(|error| {
        CliError::InvalidInput(format!("invalid log filter `{}`: {error}", config.filter))
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);
    let installed = match config.format {
        LogFormat::Text => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    // Only the first subscriber wins; a second init is a no-op.
    if let Err(error) = installed {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
    Ok(())
}
