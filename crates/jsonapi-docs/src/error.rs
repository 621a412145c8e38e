//! Error types for schema synthesis.
//!
//! Every failure is fatal for the synthesis call that raised it: either the
//! whole tree is produced or the caller gets one of these.

use thiserror::Error;

/// Errors that can occur while synthesizing a resource schema.
#[derive(Debug, Error)]
pub enum DocsError {
    /// An attribute or column carries a type tag with no example case.
    #[error("Unsupported type '{type_tag}' for attribute '{attribute}'")]
    UnsupportedType {
        /// The attribute whose type could not be resolved.
        attribute: String,
        /// The offending type tag, as declared.
        type_tag: String,
    },

    /// None of `record_type`, `static_record_type` or the fallback name is set.
    #[error("Cannot resolve the related record type for relationship '{key}'")]
    UnresolvedRelationshipType {
        /// Rendering key of the relationship.
        key: String,
    },

    /// The model's custom schema fragment cannot be merged.
    #[error("Invalid custom schema: {reason}")]
    InvalidCustomSchema {
        /// Why the fragment was rejected.
        reason: String,
    },

    /// A resource definition document could not be read.
    #[error("Invalid resource definition: {reason}")]
    InvalidDefinition {
        /// The parse failure.
        reason: String,
    },

    /// Failed to convert the schema to or from JSON.
    #[error("Failed to serialize schema: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DocsError {
    /// Create an unsupported type error.
    pub fn unsupported_type(attribute: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self::UnsupportedType {
            attribute: attribute.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Create an unresolved relationship type error.
    pub fn unresolved_relationship(key: impl Into<String>) -> Self {
        Self::UnresolvedRelationshipType { key: key.into() }
    }
}

/// Result type for schema synthesis.
pub type DocsResult<T> = Result<T, DocsError>;
