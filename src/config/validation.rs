//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (at least one attempt per endpoint)
//! - Validate the logging section (known level, non-empty file path)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Endpoint entries are not validated here; a bad entry is skipped at
//!   run time without rejecting the file
//! - An empty endpoint list is not a validation error; the run reports it

use thiserror::Error;

use crate::config::schema::MonitorConfig;

pub(crate) const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("monitor.retries must be at least 1")]
    ZeroRetries,

    #[error("logging.level {0:?} is not one of {levels}", levels = LOG_LEVELS.join(", "))]
    UnknownLogLevel(String),

    #[error("logging.file must not be empty")]
    EmptyLogFile,
}

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.monitor.retries == 0 {
        errors.push(ValidationError::ZeroRetries);
    }

    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    if config.logging.file.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyLogFile);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
