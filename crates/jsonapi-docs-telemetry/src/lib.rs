//! Logging setup for jsonapi-docs.
//!
//! The core crate only emits `tracing` events. This crate installs the
//! subscriber that renders them, as JSON or human-readable text on stderr.
//!
//! ```rust,ignore
//! use jsonapi_docs_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::production())?;
//! ```

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
