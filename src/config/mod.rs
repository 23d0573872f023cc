//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!
//! Per endpoint, at check time:
//!     EndpointEntry (raw table)
//!     → endpoint.rs (EndpointSpec or EndpointError)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Endpoint entries stay raw until the run so one bad entry cannot
//!   reject the whole file
//! - Validation separates syntactic (serde) from semantic checks

pub mod endpoint;
pub mod loader;
pub mod schema;
pub mod validation;

pub use endpoint::{EndpointError, EndpointSpec};
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{CheckConfig, EndpointEntry, LogFormat, LoggingConfig, MonitorConfig};
pub use validation::ValidationError;
