//! Main configuration types.
//!
//! This module provides the top-level [`DocsConfig`] struct and its builder.

use jsonapi_docs::SchemaSynthesizer;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ExamplesConfig, LogFormat, LoggingConfig, OutputConfig};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Complete schema generation configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use jsonapi_docs_config::DocsConfig;
///
/// let config = DocsConfig::default();
/// assert_eq!(config.logging.level, "warn");
/// assert!(config.output.pretty);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Example value generation.
    #[serde(default)]
    pub examples: ExamplesConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Document output.
    #[serde(default)]
    pub output: OutputConfig,
}

impl DocsConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonapi_docs_config::{DocsConfig, ExamplesConfig};
    ///
    /// let config = DocsConfig::builder()
    ///     .examples(ExamplesConfig {
    ///         seed: Some(42),
    ///         ..Default::default()
    ///     })
    ///     .build();
    ///
    /// assert_eq!(config.examples.seed, Some(42));
    /// ```
    #[must_use]
    pub fn builder() -> DocsConfigBuilder {
        DocsConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `examples.now` is not an RFC 3339 timestamp
    /// - `logging.level` is neither a known level nor a valid filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.examples.to_settings()?;

        let level = self.logging.level.trim().to_lowercase();
        if level.contains(['=', ',']) {
            // Full filter directive such as "jsonapi_docs=debug,warn".
            jsonapi_docs_telemetry::create_env_filter(&level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        } else if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!(
                    "unknown level {:?}, expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Build a [`SchemaSynthesizer`] carrying the example settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `examples.now` is invalid.
    pub fn synthesizer(&self) -> Result<SchemaSynthesizer, ConfigError> {
        let mut synthesizer =
            SchemaSynthesizer::new().with_examples(self.examples.to_settings()?);
        if let Some(fake_data) = self.examples.fake_data_provider() {
            synthesizer = synthesizer.with_fake_data(fake_data);
        }
        Ok(synthesizer)
    }

    /// Create a development configuration preset.
    ///
    /// Debug level pretty logs and fake-data object examples.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonapi_docs_config::DocsConfig;
    ///
    /// let config = DocsConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.examples.fake_data = true;

        config
    }

    /// Create a production configuration preset.
    ///
    /// Info level JSON logs and compact output.
    ///
    /// # Example
    ///
    /// ```
    /// use jsonapi_docs_config::{DocsConfig, LogFormat};
    ///
    /// let config = DocsConfig::production();
    /// assert_eq!(config.logging.format, LogFormat::Json);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.output.pretty = false;

        config
    }
}

/// Builder for [`DocsConfig`].
#[derive(Debug, Default)]
pub struct DocsConfigBuilder {
    examples: Option<ExamplesConfig>,
    logging: Option<LoggingConfig>,
    output: Option<OutputConfig>,
}

impl DocsConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the examples configuration.
    #[must_use]
    pub fn examples(mut self, examples: ExamplesConfig) -> Self {
        self.examples = Some(examples);
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Set the output configuration.
    #[must_use]
    pub fn output(mut self, output: OutputConfig) -> Self {
        self.output = Some(output);
        self
    }

    /// Build the configuration. Unset sections use their defaults.
    #[must_use]
    pub fn build(self) -> DocsConfig {
        DocsConfig {
            examples: self.examples.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
            output: self.output.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<DocsConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonapi_docs::{fixtures, Endpoint};

    #[test]
    fn test_default_config() {
        let config = DocsConfig::default();
        assert!(config.examples.seed.is_none());
        assert!(config.logging.enabled);
        assert!(config.output.pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_all_sections() {
        let config = DocsConfig::builder()
            .examples(ExamplesConfig {
                seed: Some(1),
                ..Default::default()
            })
            .logging(LoggingConfig {
                level: "error".to_string(),
                ..Default::default()
            })
            .output(OutputConfig { pretty: false })
            .build();

        assert_eq!(config.examples.seed, Some(1));
        assert_eq!(config.logging.level, "error");
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_validate_invalid_level() {
        let result = DocsConfig::builder()
            .logging(LoggingConfig {
                level: "chatty".to_string(),
                ..Default::default()
            })
            .build_validated();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_validate_level_is_case_insensitive() {
        let config = DocsConfig::builder()
            .logging(LoggingConfig {
                level: "INFO".to_string(),
                ..Default::default()
            })
            .build();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_filter_directives() {
        let valid = DocsConfig::builder()
            .logging(LoggingConfig {
                level: "jsonapi_docs=debug,warn".to_string(),
                ..Default::default()
            })
            .build();
        assert!(valid.validate().is_ok());

        let invalid = DocsConfig::builder()
            .logging(LoggingConfig {
                level: "jsonapi_docs=loud".to_string(),
                ..Default::default()
            })
            .build();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_now() {
        let config = DocsConfig::builder()
            .examples(ExamplesConfig {
                now: Some("2024-13-45".to_string()),
                ..Default::default()
            })
            .build();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("examples.now"));
    }

    #[test]
    fn test_development_preset() {
        let config = DocsConfig::development();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.examples.fake_data);
    }

    #[test]
    fn test_production_preset() {
        let config = DocsConfig::production();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_synthesizer_uses_example_settings() {
        let config = DocsConfig::builder()
            .examples(ExamplesConfig {
                seed: Some(5),
                fake_data: false,
                now: Some("2024-05-17T09:15:00+01:00".to_string()),
            })
            .build();

        let synthesizer = config.synthesizer().unwrap();
        assert!(synthesizer.example_settings().is_deterministic());

        let first = synthesizer
            .synthesize(&fixtures::blog_post(), &Endpoint::default())
            .unwrap();
        let second = config
            .synthesizer()
            .unwrap()
            .synthesize(&fixtures::blog_post(), &Endpoint::default())
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.pointer("/data/example/attributes/published_on"),
            Some(&serde_json::json!("2024-05-17"))
        );
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&DocsConfig::default()).unwrap();
        assert!(toml_str.contains("[examples]"));
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("[output]"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml_str = r#"
            [output]
            pretty = true
            colour = "blue"
        "#;

        let result: Result<DocsConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<DocsConfig, _> = toml::from_str("[server]\nport = 1");
        assert!(result.is_err());
    }
}
