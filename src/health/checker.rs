//! Per-endpoint check with bounded retries.
//!
//! # Responsibilities
//! - Run up to `max_attempts` GETs against one endpoint
//! - Stop at the first response carrying the expected status
//! - Wait `delay_secs` between attempts, never after the last one
//! - Log every attempt outcome

use thiserror::Error;
use tokio::time;
use tracing::{error, info, warn};

use crate::config::EndpointSpec;
use crate::health::policy::CheckPolicy;
use crate::health::probe::{HttpProbe, ProbeFault};
use crate::health::result::CheckResult;

/// Why a single attempt did not count as healthy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttemptFailure {
    #[error(transparent)]
    Transport(#[from] ProbeFault),

    #[error("unexpected status {status} (expected {expected})")]
    UnexpectedStatus { status: u16, expected: u16 },
}

/// Checks endpoints through an [`HttpProbe`].
#[derive(Debug, Clone)]
pub struct EndpointChecker<P> {
    probe: P,
}

impl<P: HttpProbe> EndpointChecker<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Check one endpoint. Never fails: exhausted attempts yield a
    /// failed [`CheckResult`].
    pub async fn check(&self, endpoint: &EndpointSpec, policy: &CheckPolicy) -> CheckResult {
        let max_attempts = policy.max_attempts.max(1);

        info!(
            name = %endpoint.name,
            url = %endpoint.url,
            "Starting health check"
        );

        for attempt in 1..=max_attempts {
            match self.attempt(endpoint, policy).await {
                Ok(status) => {
                    info!(
                        name = %endpoint.name,
                        status,
                        attempt,
                        "Endpoint healthy"
                    );
                    return CheckResult::passed(endpoint, status);
                }
                Err(failure) => log_failure(endpoint, policy, &failure, attempt, max_attempts),
            }

            if attempt < max_attempts && policy.delay_secs > 0 {
                info!(delay_secs = policy.delay_secs, "Waiting before retry");
                time::sleep(policy.delay()).await;
            }
        }

        error!(
            name = %endpoint.name,
            attempts = max_attempts,
            "Endpoint check failed"
        );
        CheckResult::failed(endpoint, max_attempts)
    }

    async fn attempt(
        &self,
        endpoint: &EndpointSpec,
        policy: &CheckPolicy,
    ) -> Result<u16, AttemptFailure> {
        let timeout = policy.timeout();
        if timeout.is_zero() {
            return Err(ProbeFault::Timeout.into());
        }

        let status = self.probe.get(&endpoint.target, timeout).await?;

        if status == endpoint.expected_status {
            Ok(status)
        } else {
            Err(AttemptFailure::UnexpectedStatus {
                status,
                expected: endpoint.expected_status,
            })
        }
    }
}

fn log_failure(
    endpoint: &EndpointSpec,
    policy: &CheckPolicy,
    failure: &AttemptFailure,
    attempt: u32,
    max_attempts: u32,
) {
    let name = endpoint.name.as_str();
    match failure {
        AttemptFailure::UnexpectedStatus { status, expected } => warn!(
            name = %name,
            status,
            expected,
            attempt,
            max_attempts,
            "Unexpected status"
        ),
        AttemptFailure::Transport(ProbeFault::Timeout) => error!(
            name = %name,
            timeout_secs = policy.timeout_secs,
            attempt,
            max_attempts,
            "Request timed out"
        ),
        AttemptFailure::Transport(ProbeFault::Connect(e)) => error!(
            name = %name,
            error = %e,
            attempt,
            max_attempts,
            "Connection error"
        ),
        AttemptFailure::Transport(ProbeFault::Request(e)) => error!(
            name = %name,
            error = %e,
            attempt,
            max_attempts,
            "Request failed"
        ),
    }
}
