//! Schema synthesis pipeline.
//!
//! [`SchemaSynthesizer`] runs the stages in a fixed order: skeleton,
//! attributes, relationships, then the model's custom fragment. It holds
//! only immutable configuration and shared collaborators, so one instance
//! can serve any number of models, from any number of threads.
//!
//! # Example
//!
//! ```
//! use jsonapi_docs::{
//!     AttributeDescriptor, Endpoint, ExampleSettings, RelationshipDescriptor,
//!     ResourceDefinition, SchemaSynthesizer,
//! };
//! use serde_json::json;
//!
//! let articles = ResourceDefinition::builder("articles")
//!     .attribute("title", AttributeDescriptor::new().with_type("string").required())
//!     .relationship("author", RelationshipDescriptor::belongs_to("author").record_type("people"))
//!     .build();
//!
//! let tree = SchemaSynthesizer::new()
//!     .with_examples(ExampleSettings::seeded(42))
//!     .synthesize(&articles, &Endpoint::new("GET", "/articles/{id}"))
//!     .unwrap();
//!
//! assert_eq!(tree.pointer("/data/properties/attributes/required"), Some(&json!(["title"])));
//! assert_eq!(
//!     tree.pointer("/data/example/relationships/author/data"),
//!     Some(&json!({"id": 1, "type": "people"}))
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::attributes::{enrich_attributes, resolve_attributes};
use crate::columns::ColumnCatalog;
use crate::error::{DocsError, DocsResult};
use crate::example::{ExampleProvider, ExampleSettings, FakeData};
use crate::merge::deep_merge;
use crate::model::{Endpoint, ResourceModel};
use crate::relationships::{enrich_relationships, resolve_relationships};
use crate::skeleton::{build_skeleton, ResourceDocument};

/// A synthesized schema, as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaTree(Value);

impl SchemaTree {
    /// Convert a typed document into a tree.
    pub fn from_document(document: &ResourceDocument) -> DocsResult<Self> {
        Ok(Self(serde_json::to_value(document)?))
    }

    /// Deep-merge `fragment` over the tree; the fragment wins on conflicts.
    ///
    /// # Errors
    ///
    /// Returns `DocsError::InvalidCustomSchema` if `fragment` is not an object.
    pub fn merge(&mut self, fragment: &Value) -> DocsResult<()> {
        if !fragment.is_object() {
            return Err(DocsError::InvalidCustomSchema {
                reason: format!("fragment root must be an object, got {}", json_kind(fragment)),
            });
        }
        deep_merge(&mut self.0, fragment);
        Ok(())
    }

    /// Look up a value by JSON pointer (e.g. `/data/example/id`).
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Borrow the underlying JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Render as compact JSON.
    pub fn to_json(&self) -> DocsResult<String> {
        serde_json::to_string(&self.0).map_err(DocsError::from)
    }

    /// Render as indented JSON.
    pub fn to_json_pretty(&self) -> DocsResult<String> {
        serde_json::to_string_pretty(&self.0).map_err(DocsError::from)
    }
}

impl From<SchemaTree> for Value {
    fn from(tree: SchemaTree) -> Self {
        tree.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds JSON:API resource schemas from model metadata.
#[derive(Clone, Default)]
pub struct SchemaSynthesizer {
    columns: Option<Arc<dyn ColumnCatalog>>,
    fake_data: Option<Arc<dyn FakeData>>,
    examples: ExampleSettings,
}

impl SchemaSynthesizer {
    /// Create a synthesizer with no collaborators and unseeded examples.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `catalog` to default attribute types from persisted columns.
    #[must_use]
    pub fn with_column_catalog(mut self, catalog: impl ColumnCatalog + 'static) -> Self {
        self.columns = Some(Arc::new(catalog));
        self
    }

    /// Use an already shared catalogue.
    #[must_use]
    pub fn with_shared_column_catalog(mut self, catalog: Arc<dyn ColumnCatalog>) -> Self {
        self.columns = Some(catalog);
        self
    }

    /// Use `fake_data` for `object` examples.
    #[must_use]
    pub fn with_fake_data(mut self, fake_data: impl FakeData + 'static) -> Self {
        self.fake_data = Some(Arc::new(fake_data));
        self
    }

    /// Set the example seed and clock.
    #[must_use]
    pub fn with_examples(mut self, settings: ExampleSettings) -> Self {
        self.examples = settings;
        self
    }

    /// The configured example settings.
    pub fn example_settings(&self) -> &ExampleSettings {
        &self.examples
    }

    /// Synthesize the schema of `model`.
    ///
    /// `endpoint` is only recorded in logs.
    ///
    /// # Errors
    ///
    /// - `DocsError::UnsupportedType` if an attribute or column type has no
    ///   example case
    /// - `DocsError::UnresolvedRelationshipType` if a relationship names no
    ///   related type
    /// - `DocsError::InvalidCustomSchema` if the custom fragment is not an object
    pub fn synthesize<M>(&self, model: &M, endpoint: &Endpoint) -> DocsResult<SchemaTree>
    where
        M: ResourceModel + ?Sized,
    {
        let span = tracing::debug_span!(
            "synthesize_schema",
            record_type = model.record_type(),
            endpoint = %endpoint
        );
        let _entered = span.enter();

        let mut examples = ExampleProvider::new(&self.examples, self.fake_data.clone());
        let mut schema = build_skeleton(model.record_type());

        let attributes = resolve_attributes(model, self.columns.as_deref())?;
        enrich_attributes(&mut schema, &attributes, &mut examples);

        let relationships = resolve_relationships(model)?;
        enrich_relationships(&mut schema, &relationships);

        let mut tree = SchemaTree::from_document(&ResourceDocument { data: schema })?;
        if let Some(fragment) = model.custom_schema() {
            debug!("Merging custom schema fragment");
            tree.merge(fragment)?;
        }

        debug!(
            attributes = attributes.len(),
            relationships = relationships.len(),
            "Schema synthesized"
        );

        Ok(tree)
    }
}

impl fmt::Debug for SchemaSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaSynthesizer")
            .field("column_catalog", &self.columns.is_some())
            .field("fake_data", &self.fake_data.is_some())
            .field("examples", &self.examples)
            .finish()
    }
}

/// Synthesize with a default [`SchemaSynthesizer`].
pub fn synthesize_schema<M>(model: &M, endpoint: &Endpoint) -> DocsResult<SchemaTree>
where
    M: ResourceModel + ?Sized,
{
    SchemaSynthesizer::new().synthesize(model, endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{Column, StaticColumnCatalog};
    use crate::example::WordFaker;
    use crate::model::{AttributeDescriptor, ResourceDefinition};
    use serde_json::json;

    #[test]
    fn test_empty_model_yields_skeleton() {
        let model = ResourceDefinition::builder("tags").build();
        let tree = synthesize_schema(&model, &Endpoint::default()).unwrap();

        assert_eq!(
            tree.pointer("/data/properties/attributes"),
            Some(&json!({"type": "object", "properties": {}}))
        );
        assert_eq!(tree.pointer("/data/example/relationships"), Some(&json!({})));
        assert_eq!(tree.pointer("/data/example/type"), Some(&json!("tags")));
    }

    #[test]
    fn test_merge_rejects_non_object_fragment() {
        let model = ResourceDefinition::builder("tags")
            .custom_schema(json!(["not", "an", "object"]))
            .build();

        let err = synthesize_schema(&model, &Endpoint::default()).unwrap_err();
        assert!(matches!(err, DocsError::InvalidCustomSchema { ref reason } if reason.contains("array")));
    }

    #[test]
    fn test_custom_schema_adds_keys() {
        let model = ResourceDefinition::builder("tags")
            .custom_schema(json!({"data": {"description": "A tag"}}))
            .build();

        let tree = synthesize_schema(&model, &Endpoint::default()).unwrap();
        assert_eq!(tree.pointer("/data/description"), Some(&json!("A tag")));
        assert_eq!(tree.pointer("/data/type"), Some(&json!("object")));
    }

    #[test]
    fn test_column_catalog_is_consulted() {
        let model = ResourceDefinition::builder("articles")
            .attribute("id_token", AttributeDescriptor::new())
            .build();
        let synthesizer = SchemaSynthesizer::new()
            .with_column_catalog(
                StaticColumnCatalog::new().table("articles", vec![Column::new("id_token", "uuid")]),
            )
            .with_examples(ExampleSettings::seeded(3));

        let tree = synthesizer.synthesize(&model, &Endpoint::default()).unwrap();
        assert_eq!(
            tree.pointer("/data/properties/attributes/properties/id_token/type"),
            Some(&json!("uuid"))
        );
        let example = tree.pointer("/data/example/attributes/id_token").unwrap();
        assert!(uuid::Uuid::parse_str(example.as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_fake_data_changes_object_examples() {
        let model = ResourceDefinition::builder("settings")
            .attribute("preferences", AttributeDescriptor::new().with_type("object"))
            .build();

        let plain = synthesize_schema(&model, &Endpoint::default()).unwrap();
        assert_eq!(
            plain.pointer("/data/example/attributes/preferences"),
            Some(&json!({"example": "object"}))
        );

        let faked = SchemaSynthesizer::new()
            .with_fake_data(WordFaker)
            .synthesize(&model, &Endpoint::default())
            .unwrap();
        let example = faked.pointer("/data/example/attributes/preferences").unwrap();
        assert_ne!(example, &json!({"example": "object"}));
        assert_eq!(example.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_tree_json_rendering() {
        let model = ResourceDefinition::builder("tags").build();
        let tree = synthesize_schema(&model, &Endpoint::default()).unwrap();

        let compact = tree.to_json().unwrap();
        assert!(compact.starts_with(r#"{"data":{"type":"object""#));
        assert!(tree.to_json_pretty().unwrap().contains('\n'));

        let value: Value = tree.clone().into();
        assert_eq!(&value, tree.as_value());
    }

    #[test]
    fn test_debug_hides_collaborators() {
        let synthesizer = SchemaSynthesizer::new().with_fake_data(WordFaker);
        let debug = format!("{synthesizer:?}");
        assert!(debug.contains("fake_data: true"));
        assert!(debug.contains("column_catalog: false"));
    }
}
