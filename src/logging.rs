//! Logging setup: stderr plus a daily rolling file under the user data dir

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

const LOG_FILE: &str = "paises.log";

/// Local wall-clock timestamps with millisecond precision.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("paises").join("logs"))
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. The returned guard flushes the
/// file writer on drop and must be held until exit.
pub fn init(level: LogLevel) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(LocalTime)
        .with_target(false);

    let file_writer = log_dir().and_then(|dir| match std::fs::create_dir_all(&dir) {
        Ok(()) => Some(tracing_appender::non_blocking(
            tracing_appender::rolling::daily(dir, LOG_FILE),
        )),
        Err(e) => {
            eprintln!("Failed to create log directory {}: {e}", dir.display());
            None
        }
    });

    match file_writer {
        Some((writer, guard)) => {
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(LocalTime);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
            None
        }
    }
}
