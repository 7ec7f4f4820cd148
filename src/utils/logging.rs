//! Logging system initialization
//!
//! Sets up tracing-based logging. Output goes to stderr by default, or to
//! `clapsense.log` in the directory named by `CLAPSENSE_LOG_DIR` when that
//! variable is set. Log level defaults to INFO and is configurable via
//! `RUST_LOG`.

use crate::error::{ClapSenseError, Result};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(log_dir) = std::env::var("CLAPSENSE_LOG_DIR") {
        let log_dir = PathBuf::from(log_dir);
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = tracing_appender::rolling::never(log_dir, "clapsense.log");
        let subscriber = fmt()
            .with_writer(file_appender)
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ClapSenseError::ConfigError(Box::new(e)))?;
    } else {
        let subscriber = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ClapSenseError::ConfigError(Box::new(e)))?;
    }

    tracing::info!("clapsense v{} started", env!("CARGO_PKG_VERSION"));
    Ok(())
}
