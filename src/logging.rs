use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

use crate::config::Config;

/// Installs a file subscriber when a log file was requested.
///
/// The terminal is in raw mode for the whole session, so nothing is ever logged
/// to stdout or stderr. Without a log file no subscriber is installed and the
/// tracing macros are no-ops.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let level = if config.verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
