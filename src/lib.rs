//! Endpoint health monitor.
//!
//! Checks a configured list of HTTP endpoints once, sequentially, with a
//! bounded retry policy, then reports a summary.
//!
//! ```text
//!   config.toml ──▶ config ──▶ report::RunReporter ──▶ console summary
//!                                   │        ▲
//!                     per endpoint  ▼        │ CheckResult
//!                           health::EndpointChecker
//!                                   │        ▲
//!                     per attempt   ▼        │ status / ProbeFault
//!                           health::HttpProbe (reqwest)
//! ```

pub mod config;
pub mod health;
pub mod lifecycle;
pub mod observability;
pub mod report;

pub use config::schema::MonitorConfig;
pub use health::{CheckPolicy, CheckResult, EndpointChecker};
pub use report::{RunReporter, RunSummary};
