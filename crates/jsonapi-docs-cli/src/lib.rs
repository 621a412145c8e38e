//! # jsonapi-docs CLI
//!
//! Reads a declarative resource definition, optionally a column catalogue,
//! and prints the synthesized JSON:API schema document on stdout.
//!
//! ```text
//! jsonapi-docs [OPTIONS] <MODEL_FILE>
//! ```
//!
//! Configuration is layered: built-in defaults, then `--config`, then
//! `JSONAPI_DOCS__*` environment variables, then `--seed`/`--compact`.

pub mod args;
pub mod input;

use anyhow::Context;
use jsonapi_docs::{Endpoint, ResourceModel};
use jsonapi_docs_config::{ConfigError, ConfigLoader, DocsConfig};
use tracing::{debug, info};

pub use args::{Args, ArgsError, Command, HELP};
pub use input::{load_columns, load_definition, InputError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve the effective configuration for `args`.
pub fn load_config(args: &Args) -> Result<DocsConfig, ConfigError> {
    let mut loader = ConfigLoader::new().with_dotenv()?;
    if let Some(path) = &args.config {
        loader = loader.with_file(path)?;
    }
    let mut config = loader.with_default_env().load()?;

    if let Some(seed) = args.seed {
        config.examples.seed = Some(seed);
    }
    if args.compact {
        config.output.pretty = false;
    }

    Ok(config)
}

/// Generate the schema document for `args` as a JSON string.
pub fn generate(args: &Args, config: &DocsConfig) -> anyhow::Result<String> {
    let definition = load_definition(&args.model)?;
    debug!(path = %args.model.display(), record_type = %definition.record_type, "Loaded definition");

    let mut synthesizer = config.synthesizer()?;
    if let Some(path) = &args.columns {
        let catalog = load_columns(path)?;
        debug!(path = %path.display(), tables = catalog.len(), "Loaded column catalogue");
        synthesizer = synthesizer.with_column_catalog(catalog);
    }

    let tree = synthesizer
        .synthesize(&definition, &Endpoint::default())
        .with_context(|| format!("failed to generate schema for {}", args.model.display()))?;

    info!(
        record_type = %definition.record_type(),
        attributes = definition.attributes().len(),
        relationships = definition.relationships().len(),
        "Schema generated"
    );

    let output = if config.output.pretty {
        tree.to_json_pretty()?
    } else {
        tree.to_json()?
    };
    Ok(output)
}
