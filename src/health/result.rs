//! Per-endpoint verdict.

use serde::Serialize;

use crate::config::EndpointSpec;

/// Outcome of checking one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub url: String,
    pub success: bool,
    pub message: String,
}

impl CheckResult {
    /// The endpoint answered with its expected status.
    pub fn passed(endpoint: &EndpointSpec, status: u16) -> Self {
        Self {
            name: endpoint.name.clone(),
            url: endpoint.url.clone(),
            success: true,
            message: format!("Success: {}", status),
        }
    }

    /// Every attempt failed.
    pub fn failed(endpoint: &EndpointSpec, attempts: u32) -> Self {
        Self {
            name: endpoint.name.clone(),
            url: endpoint.url.clone(),
            success: false,
            message: format!("Failed after {} attempts", attempts),
        }
    }

    /// Short label used in console output.
    pub fn status_label(&self) -> &'static str {
        if self.success {
            "SUCCESS"
        } else {
            "FAILED"
        }
    }
}
