//! Sequential run over all configured endpoints.

use std::fmt;
use std::io::Write;

use thiserror::Error;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::{EndpointEntry, EndpointSpec};
use crate::health::{CheckPolicy, CheckResult, EndpointChecker, HttpProbe};
use crate::report::summary::RunSummary;

/// Faults that stop a run before any endpoint is checked.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("No endpoints configured for monitoring")]
    NoEndpoints,
}

/// Drives the checker over every endpoint and reports the outcome.
///
/// Human-readable progress goes to `console`; every event is also logged.
pub struct RunReporter<P, W> {
    checker: EndpointChecker<P>,
    console: W,
}

impl<P: HttpProbe, W: Write> RunReporter<P, W> {
    pub fn new(checker: EndpointChecker<P>, console: W) -> Self {
        Self { checker, console }
    }

    pub fn checker(&self) -> &EndpointChecker<P> {
        &self.checker
    }

    pub fn into_console(self) -> W {
        self.console
    }

    /// Check every entry in order and emit the summary.
    pub async fn run(
        &mut self,
        entries: &[EndpointEntry],
        policy: &CheckPolicy,
    ) -> Result<RunSummary, RunError> {
        let span = info_span!("run", run_id = %Uuid::new_v4());
        self.run_entries(entries, policy).instrument(span).await
    }

    async fn run_entries(
        &mut self,
        entries: &[EndpointEntry],
        policy: &CheckPolicy,
    ) -> Result<RunSummary, RunError> {
        if entries.is_empty() {
            error!("{}", RunError::NoEndpoints);
            self.say(format_args!("ERROR: {}", RunError::NoEndpoints));
            return Err(RunError::NoEndpoints);
        }

        self.say(format_args!("Starting health checks..."));
        info!(
            endpoints = entries.len(),
            timeout_secs = policy.timeout_secs,
            max_attempts = policy.max_attempts,
            delay_secs = policy.delay_secs,
            "Starting health checks"
        );

        let mut results = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for (index, entry) in entries.iter().enumerate() {
            let endpoint = match EndpointSpec::from_entry(entry) {
                Ok(endpoint) => endpoint,
                Err(e) => {
                    error!(
                        position = index + 1,
                        entry = %entry,
                        error = %e,
                        "Skipping malformed endpoint"
                    );
                    self.say(format_args!(
                        "ERROR: Skipping endpoint #{} {}: {}",
                        index + 1,
                        entry,
                        e
                    ));
                    skipped += 1;
                    continue;
                }
            };

            self.say(format_args!(
                "Starting health check for {} ({})",
                endpoint.name, endpoint.url
            ));
            let result = self.checker.check(&endpoint, policy).await;
            self.say(format_args!(
                "{}: {} - {}",
                result.name,
                result.status_label(),
                result.message
            ));

            results.push(result);
        }

        let summary = RunSummary::from_results(&results, skipped);
        self.emit_summary(&summary);

        Ok(summary)
    }

    fn emit_summary(&mut self, summary: &RunSummary) {
        self.say(format_args!(""));
        self.say(format_args!("Health check summary: {}", summary.headline()));
        info!(
            successful = summary.successful,
            total = summary.total,
            skipped = summary.skipped,
            "Health check summary: {}",
            summary.headline()
        );

        if summary.total == 0 {
            warn!("No endpoints could be checked");
            self.say(format_args!("No endpoints could be checked"));
        } else if summary.all_healthy() {
            info!("All endpoints are healthy!");
            self.say(format_args!("All endpoints are healthy!"));
        } else {
            let failed = summary.failed.len();
            warn!(failed, "{} endpoints failed:", failed);
            self.say(format_args!("{} endpoints failed:", failed));

            for result in &summary.failed {
                self.report_failure(result);
            }
        }
    }

    fn report_failure(&mut self, result: &CheckResult) {
        warn!(url = %result.url, "  - {}: {}", result.name, result.message);
        self.say(format_args!("  - {}: {}", result.name, result.message));
    }

    fn say(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.console, "{}", line) {
            debug!(error = %e, "Console write failed");
        }
    }
}
