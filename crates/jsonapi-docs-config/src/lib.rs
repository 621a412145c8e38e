//! Typed configuration for jsonapi-docs.
//!
//! Configuration covers how example values are generated, how logs are
//! emitted, and how the generated document is printed. It is loaded in layers
//! (defaults → file → environment) and rejects unknown fields.
//!
//! - [`ExamplesConfig`] - RNG seed, pinned clock, fake-data objects
//! - [`LoggingConfig`] - level and format for `tracing` output
//! - [`OutputConfig`] - pretty or compact JSON
//!
//! # Example
//!
//! ```no_run
//! use jsonapi_docs_config::ConfigLoader;
//!
//! # fn main() -> Result<(), jsonapi_docs_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("jsonapi-docs.toml")?
//!     .with_default_env()
//!     .load()?;
//!
//! let synthesizer = config.synthesizer()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [examples]
//! seed = 20240517
//! fake_data = false
//! now = "2024-05-17T09:15:00+01:00"
//!
//! [logging]
//! enabled = true
//! level = "warn"
//! format = "pretty"
//!
//! [output]
//! pretty = true
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `JSONAPI_DOCS__EXAMPLES__SEED=42`
//! - `JSONAPI_DOCS__LOGGING__FORMAT=json`
//! - `JSONAPI_DOCS__OUTPUT__PRETTY=false`

mod config;
mod error;
mod loader;
mod schema;

pub use config::{DocsConfig, DocsConfigBuilder};
pub use error::ConfigError;
pub use loader::{ConfigLoader, DEFAULT_ENV_PREFIX};
pub use schema::{ExamplesConfig, LogFormat, LoggingConfig, OutputConfig};
