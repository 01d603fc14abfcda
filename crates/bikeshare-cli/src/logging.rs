//! File-based tracing setup.
//!
//! The explorer owns the terminal (raw mode for the interactive views, plain
//! stdout for the reports), so log lines go to a file instead of stderr.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::types::LogLevel;

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes buffered lines. Returns `None` when logging is off or the log
/// file cannot be opened; the explorer runs without a log in that case.
pub fn init(level: LogLevel, log_file: &str) -> Result<Option<WorkerGuard>> {
    if level == LogLevel::Off && std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let appender = match open_appender(log_file) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            return Ok(None);
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true))
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}

fn open_appender(log_file: &str) -> Result<RollingFileAppender> {
    let path = Path::new(log_file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("invalid log file path: {}", log_file))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("cannot open log file {}", log_file))
}
