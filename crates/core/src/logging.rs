//! Log output for the resolver and its hosts.
//!
//! Everything goes to a daily rolling file per component. A second, terse
//! stderr layer can be switched on for interactive use.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory under the home directory that holds the log files.
pub const LOG_DIR: &str = ".appctx/logs";
/// Overrides the log directory.
pub const ENV_LOG_DIR: &str = "APPCTX_LOG_DIR";
/// Filter directives, same syntax as `RUST_LOG`.
pub const ENV_LOG_FILTER: &str = "APPCTX_LOG";

const DEFAULT_FILTER: &str = "info";

pub fn log_dir() -> PathBuf {
    log_dir_with(|key| std::env::var(key).ok())
}

/// Resolves the log directory through `lookup` instead of the process
/// environment.
pub fn log_dir_with(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    match lookup(ENV_LOG_DIR).filter(|dir| !dir.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(LOG_DIR),
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber for `component` and returns the guard that
/// flushes the file writer when dropped.
///
/// Installation is skipped if a subscriber is already set.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    // <component>.log.<date>
    let appender = tracing_appender::rolling::daily(&dir, format!("{component}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    let _ = tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
