//! Retry policy shared by every check in a run.

use std::time::Duration;

use crate::config::CheckConfig;

/// Timeout, attempt budget and inter-attempt delay for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckPolicy {
    /// Per-request deadline in seconds. With 0 every attempt times out
    /// without a request being sent.
    pub timeout_secs: u64,
    pub max_attempts: u32,
    pub delay_secs: u64,
}

impl CheckPolicy {
    pub fn new(timeout_secs: u64, max_attempts: u32, delay_secs: u64) -> Self {
        Self {
            timeout_secs,
            max_attempts,
            delay_secs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

impl From<&CheckConfig> for CheckPolicy {
    fn from(config: &CheckConfig) -> Self {
        Self::new(config.timeout, config.retries, config.delay)
    }
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self::from(&CheckConfig::default())
    }
}
