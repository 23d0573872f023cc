//! Structured logging.
//!
//! # Responsibilities
//! - Build the subscriber described by `[logging]`
//! - Create the log directory and open the log file for appending
//! - Hand the writer guard back so buffered lines flush at exit
//!
//! The caller attaches the returned [`Dispatch`] to the work it drives;
//! nothing here touches the global default.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - JSON format for machines, plain text otherwise
//! - Log level configurable via config and environment

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open log file {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Resolve the configured log file against the project root.
pub fn resolve_log_path(root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}

/// Open `path` for appending, creating missing parent directories.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LoggingError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Build the subscriber writing to the configured file.
///
/// Keep the returned guard alive until logging is done.
pub fn build_logging(
    config: &LoggingConfig,
    root: &Path,
) -> Result<(Dispatch, WorkerGuard), LoggingError> {
    let path = resolve_log_path(root, &config.file);
    let file = open_log_file(&path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.level.to_ascii_lowercase())?,
    };

    let dispatch = match config.format {
        LogFormat::Json => Dispatch::new(
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(writer)),
        ),
        LogFormat::Text => Dispatch::new(
            tracing_subscriber::registry().with(env_filter).with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(writer),
            ),
        ),
    };

    Ok((dispatch, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_joins_root() {
        assert_eq!(
            resolve_log_path(Path::new("/srv/monitor"), Path::new("logs/health.log")),
            PathBuf::from("/srv/monitor/logs/health.log")
        );
    }

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(
            resolve_log_path(Path::new("/srv/monitor"), Path::new("/var/log/health.log")),
            PathBuf::from("/var/log/health.log")
        );
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/health.log");

        open_log_file(&path).unwrap();

        assert!(path.is_file());
    }

    #[test]
    fn test_build_logging_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: PathBuf::from("logs/monitor.log"),
            level: "info".to_string(),
            format: LogFormat::Json,
        };

        let (dispatch, guard) = build_logging(&config, dir.path()).unwrap();
        tracing::dispatcher::with_default(&dispatch, || tracing::info!("written"));
        drop(guard);

        let content = fs::read_to_string(dir.path().join("logs/monitor.log")).unwrap();
        assert!(content.contains("written"));
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("logs");
        fs::write(&blocker, "not a directory").unwrap();

        let err = open_log_file(&blocker.join("health.log")).unwrap_err();

        assert!(matches!(err, LoggingError::CreateDir { .. }));
    }
}
