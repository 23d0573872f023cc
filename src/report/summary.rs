//! Aggregate view over one run's results.

use serde::Serialize;

use crate::health::CheckResult;

/// Totals for a run. Recomputed from the results, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Endpoints that were checked (malformed entries excluded).
    pub total: usize,
    pub successful: usize,
    /// Failed results, in configuration order.
    pub failed: Vec<CheckResult>,
    /// Entries skipped because they could not be decoded.
    pub skipped: usize,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult], skipped: usize) -> Self {
        Self {
            total: results.len(),
            successful: results.iter().filter(|r| r.success).count(),
            failed: results.iter().filter(|r| !r.success).cloned().collect(),
            skipped,
        }
    }

    /// `"<successful>/<total> endpoints healthy"`
    pub fn headline(&self) -> String {
        format!("{}/{} endpoints healthy", self.successful, self.total)
    }

    pub fn all_healthy(&self) -> bool {
        self.total > 0 && self.successful == self.total
    }
}
