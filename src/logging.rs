//! Tracing setup for the binary

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

/// Install a subscriber writing to `log_path`.
///
/// `RUST_LOG` takes precedence over the configured filter. Keep the returned
/// guard alive for the lifetime of the process or buffered lines are lost.
pub fn init(log_path: &Path, config: &LoggingConfig) -> Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("Log path has no file name: {:?}", log_path))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .context("Invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(writer).with_ansi(false))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;
    }

    Ok(guard)
}
