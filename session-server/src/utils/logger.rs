//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. When `log_dir` exists, logs
/// go to stdout and a daily rolling file `session-server.YYYY-MM-DD`.
/// Calling this twice is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "session-server"));

    // try_init: tests and embedders may have installed a subscriber already
    let result = match (file_appender, json) {
        (Some(file), true) => builder
            .json()
            .with_writer(std::io::stdout.and(file))
            .try_init(),
        (Some(file), false) => builder
            .with_writer(std::io::stdout.and(file))
            .try_init(),
        (None, true) => builder.json().try_init(),
        (None, false) => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file(Some("debug"), false, Some(dir.path()));
        init_logger();
        tracing::info!("logger smoke test");
    }
}
