//! Logging setup for the command-line front end.
//!
//! Events go to stderr so that reports written to stdout stay clean.
//! `RUST_LOG` takes precedence over the verbosity flag.

use std::time::Instant;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::{ChatlensError, Result};

/// Maps a `-v` count to a level name: 0 is `warn`, 1 `info`, 2 `debug`,
/// anything above `trace`.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`ChatlensError::Logging`] if the level filter cannot be built or
/// a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_for_verbosity(verbosity)))
        .map_err(|e| ChatlensError::logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ChatlensError::logging(e.to_string()))?;

    debug!(verbosity, "logging initialized");
    Ok(())
}

/// Logs how long a pipeline step took.
pub struct OperationTimer {
    operation: &'static str,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    /// Logs the elapsed time at `info` and returns it in milliseconds.
    pub fn finish(self) -> u128 {
        let duration = self.start.elapsed().as_millis();
        info!(
            operation = self.operation,
            duration_ms = duration,
            "operation completed"
        );
        duration
    }
}
