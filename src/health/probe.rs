//! Single-request HTTP capability.
//!
//! # Responsibilities
//! - Issue one GET with an optional deadline
//! - Report the status code, or classify the transport fault
//!
//! # Design Decisions
//! - Status interpretation is left to the checker
//! - Redirects are followed (reqwest default policy)
//! - The response body is never read

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Transport-level failure of a single GET.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFault {
    #[error("request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// The narrow HTTP surface the checker depends on.
pub trait HttpProbe {
    /// Issue one GET to `url`, bounded by `timeout`, and return the
    /// response status code.
    fn get(
        &self,
        url: &Url,
        timeout: Duration,
    ) -> impl Future<Output = Result<u16, ProbeFault>> + Send;
}

/// [`HttpProbe`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    client: reqwest::Client,
}

impl ReqwestProbe {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("endpoint-monitor/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpProbe for ReqwestProbe {
    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, ProbeFault> {
        let request = self.client.get(url.clone()).timeout(timeout);

        match request.send().await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) => Err(classify(&e)),
        }
    }
}

fn classify(error: &reqwest::Error) -> ProbeFault {
    // A connect that runs past the deadline reports both; the deadline wins.
    if error.is_timeout() {
        ProbeFault::Timeout
    } else if error.is_connect() {
        ProbeFault::Connect(error.to_string())
    } else {
        ProbeFault::Request(error.to_string())
    }
}
