//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level` when it is set. Returns an
/// error if the filter directive is invalid or a global subscriber is already
/// installed, so callers in tests can ignore the second initialization.
pub fn init_tracing(
    config: &LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    match config.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.pretty().try_init()?,
        LogFormat::Compact => builder.compact().try_init()?,
    }

    tracing::debug!(level = %config.level, format = ?config.format, "Tracing initialized");
    Ok(())
}
