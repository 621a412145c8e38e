//! Configuration schema types.
//!
//! This module defines the structure of each configuration section.

use std::io::IsTerminal;

use chrono::DateTime;
use jsonapi_docs::{ExampleSettings, WordFaker};
use jsonapi_docs_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Example generation settings.
///
/// Leaving `seed` and `now` unset gives fresh random examples and the current
/// time on every run. Setting both makes the generated document reproducible.
///
/// # Example
///
/// ```
/// use jsonapi_docs_config::ExamplesConfig;
///
/// let config = ExamplesConfig {
///     seed: Some(7),
///     fake_data: false,
///     now: Some("2024-05-17T09:15:00+01:00".to_string()),
/// };
///
/// let settings = config.to_settings().unwrap();
/// assert!(settings.is_deterministic());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExamplesConfig {
    /// Seed for the example RNG.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Use random slug words for `object` examples instead of the fixed map.
    #[serde(default)]
    pub fake_data: bool,

    /// Pinned clock for `date`/`datetime`/`time` examples (RFC 3339).
    #[serde(default)]
    pub now: Option<String>,
}

impl ExamplesConfig {
    /// Converts this section into the core crate's [`ExampleSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `now` is not RFC 3339.
    pub fn to_settings(&self) -> Result<ExampleSettings, ConfigError> {
        let mut settings = ExampleSettings {
            seed: self.seed,
            ..ExampleSettings::default()
        };

        if let Some(now) = &self.now {
            let parsed = DateTime::parse_from_rfc3339(now).map_err(|e| {
                ConfigError::invalid_value("examples.now", format!("{now:?}: {e}"))
            })?;
            settings = settings.with_now(parsed);
        }

        Ok(settings)
    }

    /// The fake-data provider selected by `fake_data`, if any.
    pub fn fake_data_provider(&self) -> Option<WordFaker> {
        self.fake_data.then_some(WordFaker)
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs.
    Json,
    /// Human-readable pretty format.
    #[default]
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Builds the telemetry crate's [`LogConfig`] from this section.
    ///
    /// Colour is only kept when stderr is a terminal.
    pub fn to_log_config(&self) -> LogConfig {
        let base = match self.format {
            LogFormat::Json => LogConfig::production(),
            LogFormat::Pretty => LogConfig::development(),
        };

        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            ansi: base.ansi && std::io::stderr().is_terminal(),
            ..base
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent the emitted JSON document.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_true() -> bool {
    true
}
