//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! EndpointSpec + CheckPolicy
//!     → checker.rs (attempt loop, fixed delay between attempts)
//!     → probe.rs (one GET per attempt, status or fault)
//!     → result.rs (one CheckResult per endpoint)
//! ```
//!
//! # Design Decisions
//! - Attempts are sequential; the retry delay is awaited inline
//! - Wrong status and transport faults are both plain retry triggers
//! - Nothing escapes `check`: every fault becomes the next attempt or
//!   the final failure result
//! - The HTTP capability is a trait so the loop can be driven without
//!   a network

pub mod checker;
pub mod policy;
pub mod probe;
pub mod result;

#[cfg(test)]
pub(crate) mod fixtures;

pub use checker::{AttemptFailure, EndpointChecker};
pub use policy::CheckPolicy;
pub use probe::{HttpProbe, ProbeFault, ReqwestProbe};
pub use result::CheckResult;
