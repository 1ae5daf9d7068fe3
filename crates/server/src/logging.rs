//! Logging setup for the geoaddr server.
//!
//! Events go to two places:
//! - an append-only log file (`log.txt` in the data directory by default)
//! - stdout, for whoever is tailing the process
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured
//! level.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use geoaddr_executor::{GeoaddrConfig, LoggingConfig, CONFIG_FILE_NAME};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the global subscriber.
///
/// Creates `log_dir` if needed. The log file is opened for append and never
/// truncated, so records from earlier runs are kept.
///
/// # Errors
///
/// Returns an error if the directory or the log file cannot be created.
pub fn init_logging(log_dir: &Path, log_file: &str, level: &str) -> io::Result<LoggingGuard> {
    fs::create_dir_all(log_dir)?;
    ensure_log_file(&log_dir.join(log_file))?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Logging settings for `data_dir`.
///
/// Read before the database is opened so that open failures reach the log
/// file. A missing or unreadable config file yields the defaults; the
/// database open reports the actual config error.
pub fn settings_for(data_dir: &Path) -> LoggingConfig {
    GeoaddrConfig::from_file(&data_dir.join(CONFIG_FILE_NAME))
        .map(|config| config.logging)
        .unwrap_or_default()
}

/// Build the filter: `RUST_LOG` wins, then `level`, then `info`.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Create the file if missing without touching existing content.
fn ensure_log_file(path: &Path) -> io::Result<()> {
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // init_logging installs a global subscriber, so only the file handling
    // is exercised here.

    #[test]
    fn test_creates_missing_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        assert!(!path.exists());

        ensure_log_file(&path).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_keeps_existing_log_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        fs::write(&path, "2026-01-01 INFO Address created\n").unwrap();

        ensure_log_file(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "2026-01-01 INFO Address created\n"
        );
    }

    #[test]
    fn test_settings_read_from_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nfile = \"service.log\"\nlevel = \"debug\"\n",
        )
        .unwrap();

        let settings = settings_for(dir.path());
        assert_eq!(settings.file, "service.log");
        assert_eq!(settings.level, "debug");
    }

    #[test]
    fn test_settings_default_without_config_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(settings_for(dir.path()), LoggingConfig::default());
        assert_eq!(settings_for(&dir.path().join("not-yet-created")).file, "log.txt");
    }

    #[test]
    fn test_settings_default_with_broken_config_file() {
        // The database open fails on this file later; logging must already work
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "busy_timeout_ms = \"soon\"").unwrap();
        assert_eq!(settings_for(dir.path()), LoggingConfig::default());
    }

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage
        let _ = env_filter("not a [valid directive");
        let _ = env_filter("debug");
    }
}
