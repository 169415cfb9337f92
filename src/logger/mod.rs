//! Logger initialization driven by the `[logger]` settings section.
//!
//! Installs a global tracing subscriber once at startup. `logger.level`
//! holds one of the five level names (settings validation enforces this)
//! and becomes the subscriber's default filter directive.

use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Initialize the global tracing subscriber.
///
/// Fails when a subscriber is already installed or the level directive
/// does not parse.
pub fn init(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.level)
        .map_err(|e| anyhow::anyhow!("invalid logger.level '{}': {}", settings.level, e))?;

    match settings.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(settings.colored)
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
    }

    Ok(())
}
