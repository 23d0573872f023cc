//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the endpoint monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Log destination and verbosity.
    pub logging: LoggingConfig,

    /// Retry policy applied to every endpoint.
    pub monitor: CheckConfig,

    /// Endpoints to check, in the order they are reported.
    pub endpoints: Vec<EndpointEntry>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path. Relative paths resolve against the project root.
    pub file: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Line format written to the log file.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("logs/health_monitor.log"),
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Check policy settings, all in whole seconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Per-request timeout. 0 disables the deadline.
    pub timeout: u64,

    /// Maximum number of attempts per endpoint (at least 1).
    pub retries: u32,

    /// Pause between two attempts.
    pub delay: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            timeout: 5,
            retries: 3,
            delay: 2,
        }
    }
}

/// A single `[[endpoints]]` table, kept undecoded.
///
/// Decoding happens per entry when the run reaches it, see
/// [`EndpointSpec::from_entry`](crate::config::EndpointSpec::from_entry).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct EndpointEntry(toml::Value);

impl EndpointEntry {
    pub fn as_value(&self) -> &toml::Value {
        &self.0
    }
}

impl fmt::Display for EndpointEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            toml::Value::Table(table) => {
                write!(f, "{{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {} = {}", key, value)?;
                }
                write!(f, " }}")
            }
            other => write!(f, "{}", other),
        }
    }
}
