//! Persisted column metadata.
//!
//! A [`ColumnCatalog`] knows which columns are stored for a record type and
//! their native storage types. When one is injected into the synthesizer,
//! the storage type becomes the default type of an attribute with the same
//! name.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::AttributeDescriptor;

/// A persisted column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Column {
    /// Column name, matched against attribute names.
    pub name: String,
    /// Native storage type tag (e.g. `integer`, `datetime`, `uuid`).
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Documentation attached at the persistence layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<AttributeDescriptor>,
}

impl Column {
    /// Create a column without documentation.
    #[must_use]
    pub fn new(name: impl Into<String>, storage_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_type: storage_type.into(),
            documentation: None,
        }
    }

    /// Attach documentation.
    #[must_use]
    pub fn with_documentation(mut self, documentation: AttributeDescriptor) -> Self {
        self.documentation = Some(documentation);
        self
    }
}

/// Source of persisted column metadata.
pub trait ColumnCatalog: Send + Sync {
    /// Columns stored for `record_type`, or `None` when the record type has
    /// no persisted table.
    fn columns_for(&self, record_type: &str) -> Option<Vec<Column>>;
}

/// In-memory catalogue keyed by record type.
///
/// Deserializes from a map of record type to column list:
///
/// ```
/// use jsonapi_docs::{ColumnCatalog, StaticColumnCatalog};
///
/// let catalog: StaticColumnCatalog = serde_json::from_str(
///     r#"{"articles": [{"name": "id", "type": "integer"}]}"#,
/// ).unwrap();
///
/// assert_eq!(catalog.columns_for("articles").unwrap().len(), 1);
/// assert!(catalog.columns_for("people").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticColumnCatalog {
    tables: IndexMap<String, Vec<Column>>,
}

impl StaticColumnCatalog {
    /// Create an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table.
    #[must_use]
    pub fn table(mut self, record_type: impl Into<String>, columns: Vec<Column>) -> Self {
        self.insert(record_type, columns);
        self
    }

    /// Insert or replace a table in place.
    pub fn insert(&mut self, record_type: impl Into<String>, columns: Vec<Column>) {
        self.tables.insert(record_type.into(), columns);
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no tables are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl ColumnCatalog for StaticColumnCatalog {
    fn columns_for(&self, record_type: &str) -> Option<Vec<Column>> {
        self.tables.get(record_type).cloned()
    }
}
