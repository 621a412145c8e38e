//! Loading resource definitions and column catalogues from disk.

use std::fs;
use std::path::{Path, PathBuf};

use jsonapi_docs::{DocsError, ResourceDefinition, StaticColumnCatalog};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Input file errors.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither `.toml` nor `.json`.
    #[error("unsupported file format: {path} (expected .toml or .json)")]
    UnsupportedFormat {
        /// File path.
        path: PathBuf,
    },

    /// The file did not parse.
    #[error("failed to parse {path}: {reason}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

impl Format {
    fn of(path: &Path) -> Result<Self, InputError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load a resource definition.
pub fn load_definition(path: &Path) -> Result<ResourceDefinition, InputError> {
    let format = Format::of(path)?;
    let content = read(path)?;

    match format {
        Format::Json => ResourceDefinition::from_json(&content).map_err(|e| match e {
            DocsError::InvalidDefinition { reason } => InputError::Parse {
                path: path.to_path_buf(),
                reason,
            },
            other => InputError::Parse {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        }),
        Format::Toml => parse_toml(&content, path),
    }
}

/// Load a column catalogue.
pub fn load_columns(path: &Path) -> Result<StaticColumnCatalog, InputError> {
    let format = Format::of(path)?;
    let content = read(path)?;

    match format {
        Format::Json => serde_json::from_str(&content).map_err(|e| InputError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
        Format::Toml => parse_toml(&content, path),
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_toml<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T, InputError> {
    toml::from_str(content).map_err(|e| InputError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
