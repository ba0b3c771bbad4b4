//! Plumbing shared by the bundled binaries.

use std::path::Path;

use tracing::Level;

use crate::config::{self, ConfigError, DeskConfig};

/// Install a stderr log subscriber: WARN by default, DEBUG when `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the `--config` file if one was given, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> Result<DeskConfig, ConfigError> {
    let config = config::load_or_default(path)?;
    tracing::debug!("effective configuration: {:?}", config);
    Ok(config)
}
