//! Run reporting subsystem.
//!
//! # Data Flow
//! ```text
//! [[endpoints]] entries (configuration order)
//!     → reporter.rs (decode entry, skip malformed, check sequentially)
//!     → summary.rs (counts + failed list, derived from results)
//!     → console sink + structured log
//! ```
//!
//! # Design Decisions
//! - Checks never run concurrently; report order is config order
//! - A malformed entry is skipped and excluded from the totals
//! - An empty endpoint list is fatal to the run
//! - The console mirrors the log at a coarser grain

pub mod reporter;
pub mod summary;

pub use reporter::{RunError, RunReporter};
pub use summary::RunSummary;
