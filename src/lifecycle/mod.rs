//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT/SIGTERM handlers registered first
//!
//! Startup (startup.rs):
//!     Locate project root → Load config (or fallback) → Validate
//!
//! Run (app.rs):
//!     Build logging → Build HTTP client → Run checks, raced against
//!     the interrupt → RunOutcome → exit code
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal (exit code 1)
//! - An interrupt is a normal stop (exit code 0), not a crash

pub mod app;
pub mod signals;
pub mod startup;

pub use app::{run, Cli, RunOutcome};
