//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! health + report subsystems produce:
//!     → tracing events with structured fields
//!     → a `run` span carrying the run ID
//!
//! Consumers:
//!     → logging.rs subscriber → non-blocking writer → log file
//! ```
//!
//! # Design Decisions
//! - The core only emits events; the binary installs the subscriber once
//! - Text or JSON lines, chosen in config
//! - `RUST_LOG` overrides the configured level

pub mod logging;
