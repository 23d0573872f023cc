//! Startup orchestration.
//!
//! # Responsibilities
//! - Locate the project root used for default and relative paths
//! - Load the explicit config file, the default one, or the fallback
//!
//! # Design Decisions
//! - An explicit `--config` that cannot be read is fatal
//! - A missing default config falls back to built-in defaults (with no
//!   endpoints, so the run still stops with a configuration error)

use std::env;
use std::path::{Path, PathBuf};

use crate::config::{load_config, ConfigError, MonitorConfig};

/// Default config location, relative to the project root.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    File(PathBuf),
    Fallback,
}

/// Nearest ancestor of `start` holding a `Cargo.toml`, else `start`.
pub fn find_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join("Cargo.toml").is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// Project root for the current working directory.
pub fn project_root() -> PathBuf {
    match env::current_dir() {
        Ok(cwd) => find_project_root(&cwd),
        Err(_) => PathBuf::from("."),
    }
}

/// Load the configuration the process starts with.
pub fn load_startup_config(
    explicit: Option<&Path>,
    root: &Path,
) -> Result<(MonitorConfig, ConfigOrigin), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, ConfigOrigin::File(path.to_path_buf())));
    }

    let default_path = root.join(DEFAULT_CONFIG_PATH);
    if default_path.is_file() {
        let config = load_config(&default_path)?;
        Ok((config, ConfigOrigin::File(default_path)))
    } else {
        Ok((MonitorConfig::default(), ConfigOrigin::Fallback))
    }
}
