//! Resource model metadata.
//!
//! A [`ResourceModel`] is anything that can describe its serialized shape:
//! a record type name, the attributes and relationships it renders, and an
//! optional schema fragment to merge over the generated output.
//! [`ResourceDefinition`] is the declarative, serde-friendly implementation
//! used by the CLI and by tests.
//!
//! # Example
//!
//! ```
//! use jsonapi_docs::{AttributeDescriptor, RelationshipDescriptor, ResourceDefinition, ResourceModel};
//!
//! let articles = ResourceDefinition::builder("articles")
//!     .attribute("title", AttributeDescriptor::new().with_type("string").required())
//!     .relationship("author", RelationshipDescriptor::belongs_to("author").record_type("people"))
//!     .build();
//!
//! assert_eq!(articles.record_type(), "articles");
//! assert_eq!(articles.attributes().len(), 1);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocsError, DocsResult};

/// Serialization metadata of a single resource type.
pub trait ResourceModel {
    /// JSON:API `type` of the resource.
    fn record_type(&self) -> &str;

    /// Serialized attributes, in rendering order.
    fn attributes(&self) -> &IndexMap<String, AttributeDescriptor>;

    /// Serialized relationships keyed by association name, in rendering order.
    fn relationships(&self) -> &IndexMap<String, RelationshipDescriptor>;

    /// Schema fragment deep-merged over the generated tree.
    fn custom_schema(&self) -> Option<&Value> {
        None
    }
}

/// Documentation attached to a serialized attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDescriptor {
    /// Type tag, case-insensitive. Defaults to `string` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
    /// Whether the attribute is listed as required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Explicit example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Allowed values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "enum", alias = "values")]
    pub enum_values: Option<Vec<Value>>,
}

impl AttributeDescriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type tag.
    #[must_use]
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = Some(type_tag.into());
        self
    }

    /// Mark the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Set an explicit example.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Set the allowed values.
    #[must_use]
    pub fn with_enum<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Fill every unset field from `fallback`.
    #[must_use]
    pub fn or(mut self, fallback: &AttributeDescriptor) -> Self {
        if self.type_tag.is_none() {
            self.type_tag.clone_from(&fallback.type_tag);
        }
        if self.required.is_none() {
            self.required = fallback.required;
        }
        if self.example.is_none() {
            self.example.clone_from(&fallback.example);
        }
        if self.enum_values.is_none() {
            self.enum_values.clone_from(&fallback.enum_values);
        }
        self
    }
}

/// Association kind of a relationship.
///
/// Only `has_many` is rendered as a collection; every other kind is singular.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// To-many association.
    HasMany,
    /// To-one association owned by the other side.
    HasOne,
    /// To-one association owned by this side.
    #[default]
    BelongsTo,
    /// Any other association kind; rendered as singular.
    #[serde(other)]
    Other,
}

impl RelationshipKind {
    /// Whether this kind renders as an array of identifiers.
    pub fn is_collection(self) -> bool {
        self == Self::HasMany
    }
}

/// Serialization metadata of a relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipDescriptor {
    /// Rendering key. Falls back to the association name when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Association kind.
    #[serde(default)]
    pub relationship_type: RelationshipKind,
    /// Related record type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    /// Related record type fixed at declaration time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_record_type: Option<String>,
    /// Name of the method producing the related object; last resort for the
    /// example `type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(alias = "fallback_name")]
    pub object_method_name: Option<String>,
}

impl RelationshipDescriptor {
    /// Create a descriptor with the given rendering key and kind.
    #[must_use]
    pub fn new(key: impl Into<String>, relationship_type: RelationshipKind) -> Self {
        Self {
            key: Some(key.into()),
            relationship_type,
            ..Default::default()
        }
    }

    /// Create a `has_many` descriptor.
    #[must_use]
    pub fn has_many(key: impl Into<String>) -> Self {
        Self::new(key, RelationshipKind::HasMany)
    }

    /// Create a `has_one` descriptor.
    #[must_use]
    pub fn has_one(key: impl Into<String>) -> Self {
        Self::new(key, RelationshipKind::HasOne)
    }

    /// Create a `belongs_to` descriptor.
    #[must_use]
    pub fn belongs_to(key: impl Into<String>) -> Self {
        Self::new(key, RelationshipKind::BelongsTo)
    }

    /// Set the related record type.
    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Set the static related record type.
    #[must_use]
    pub fn static_record_type(mut self, record_type: impl Into<String>) -> Self {
        self.static_record_type = Some(record_type.into());
        self
    }

    /// Set the fallback method name.
    #[must_use]
    pub fn object_method_name(mut self, name: impl Into<String>) -> Self {
        self.object_method_name = Some(name.into());
        self
    }

    /// The key this relationship renders under.
    pub fn rendering_key<'a>(&'a self, association: &'a str) -> &'a str {
        self.key.as_deref().unwrap_or(association)
    }

    /// The related type used in examples: `record_type`, then
    /// `static_record_type`, then `object_method_name`. Blank values are
    /// skipped.
    pub fn related_type(&self) -> Option<&str> {
        [
            &self.record_type,
            &self.static_record_type,
            &self.object_method_name,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|name| !name.trim().is_empty())
    }
}

/// Context about the endpoint being documented.
///
/// Carried through synthesis for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// HTTP method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Path template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Endpoint {
    /// Create an endpoint descriptor.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.method, &self.path) {
            (Some(method), Some(path)) => write!(f, "{} {}", method.to_uppercase(), path),
            (None, Some(path)) => f.write_str(path),
            (Some(method), None) => f.write_str(&method.to_uppercase()),
            (None, None) => f.write_str("-"),
        }
    }
}

/// Declarative resource model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinition {
    /// JSON:API `type`.
    pub record_type: String,
    /// Attributes in rendering order.
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeDescriptor>,
    /// Relationships keyed by association name.
    #[serde(default)]
    pub relationships: IndexMap<String, RelationshipDescriptor>,
    /// Fragment merged over the generated schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_schema: Option<Value>,
}

impl ResourceDefinition {
    /// Start building a definition for `record_type`.
    #[must_use]
    pub fn builder(record_type: impl Into<String>) -> ResourceDefinitionBuilder {
        ResourceDefinitionBuilder::new(record_type)
    }

    /// Parse a definition from JSON.
    pub fn from_json(content: &str) -> DocsResult<Self> {
        serde_json::from_str(content).map_err(|e| DocsError::InvalidDefinition {
            reason: e.to_string(),
        })
    }
}

impl ResourceModel for ResourceDefinition {
    fn record_type(&self) -> &str {
        &self.record_type
    }

    fn attributes(&self) -> &IndexMap<String, AttributeDescriptor> {
        &self.attributes
    }

    fn relationships(&self) -> &IndexMap<String, RelationshipDescriptor> {
        &self.relationships
    }

    fn custom_schema(&self) -> Option<&Value> {
        self.custom_schema.as_ref()
    }
}

/// Builder for [`ResourceDefinition`].
#[derive(Debug)]
pub struct ResourceDefinitionBuilder {
    definition: ResourceDefinition,
}

impl ResourceDefinitionBuilder {
    /// Create a builder for `record_type`.
    #[must_use]
    pub fn new(record_type: impl Into<String>) -> Self {
        Self {
            definition: ResourceDefinition {
                record_type: record_type.into(),
                ..Default::default()
            },
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, descriptor: AttributeDescriptor) -> Self {
        self.definition.attributes.insert(name.into(), descriptor);
        self
    }

    /// Add a relationship under its association name.
    #[must_use]
    pub fn relationship(
        mut self,
        association: impl Into<String>,
        descriptor: RelationshipDescriptor,
    ) -> Self {
        self.definition
            .relationships
            .insert(association.into(), descriptor);
        self
    }

    /// Set the custom schema fragment.
    #[must_use]
    pub fn custom_schema(mut self, fragment: Value) -> Self {
        self.definition.custom_schema = Some(fragment);
        self
    }

    /// Build the definition.
    #[must_use]
    pub fn build(self) -> ResourceDefinition {
        self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_descriptor_builder() {
        let descriptor = AttributeDescriptor::new()
            .with_type("String")
            .required()
            .with_example("Hello")
            .with_enum(["a", "b"]);

        assert_eq!(descriptor.type_tag.as_deref(), Some("String"));
        assert_eq!(descriptor.required, Some(true));
        assert_eq!(descriptor.example, Some(json!("Hello")));
        assert_eq!(descriptor.enum_values, Some(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn test_attribute_descriptor_values_alias() {
        let descriptor: AttributeDescriptor =
            serde_json::from_value(json!({"type": "string", "values": ["draft", "live"]})).unwrap();
        assert_eq!(
            descriptor.enum_values,
            Some(vec![json!("draft"), json!("live")])
        );
    }

    #[test]
    fn test_attribute_descriptor_rejects_unknown_keys() {
        let result = serde_json::from_value::<AttributeDescriptor>(json!({"kind": "string"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_attribute_descriptor_or_keeps_own_fields() {
        let own = AttributeDescriptor::new().with_example("mine");
        let fallback = AttributeDescriptor::new()
            .with_type("text")
            .with_example("theirs")
            .required();

        let merged = own.or(&fallback);
        assert_eq!(merged.type_tag.as_deref(), Some("text"));
        assert_eq!(merged.example, Some(json!("mine")));
        assert_eq!(merged.required, Some(true));
    }

    #[test]
    fn test_relationship_kind_parsing() {
        let kind: RelationshipKind = serde_json::from_value(json!("has_many")).unwrap();
        assert!(kind.is_collection());

        let kind: RelationshipKind = serde_json::from_value(json!("belongs_to")).unwrap();
        assert!(!kind.is_collection());

        let kind: RelationshipKind =
            serde_json::from_value(json!("has_and_belongs_to_many")).unwrap();
        assert_eq!(kind, RelationshipKind::Other);
        assert!(!kind.is_collection());
    }

    #[test]
    fn test_related_type_fallback_order() {
        let rel = RelationshipDescriptor::belongs_to("author")
            .static_record_type("writers")
            .object_method_name("author");
        assert_eq!(rel.related_type(), Some("writers"));

        let rel = rel.record_type("people");
        assert_eq!(rel.related_type(), Some("people"));

        let rel = RelationshipDescriptor::belongs_to("author").object_method_name("author");
        assert_eq!(rel.related_type(), Some("author"));

        let rel = RelationshipDescriptor::belongs_to("author").record_type("  ");
        assert_eq!(rel.related_type(), None);
    }

    #[test]
    fn test_rendering_key_defaults_to_association() {
        let rel = RelationshipDescriptor {
            record_type: Some("people".to_string()),
            ..Default::default()
        };
        assert_eq!(rel.rendering_key("author"), "author");

        let rel = RelationshipDescriptor::belongs_to("writer");
        assert_eq!(rel.rendering_key("author"), "writer");
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(Endpoint::new("get", "/articles/{id}").to_string(), "GET /articles/{id}");
        assert_eq!(Endpoint::default().to_string(), "-");
    }

    #[test]
    fn test_definition_from_json() {
        let definition = ResourceDefinition::from_json(
            r#"{
                "record_type": "articles",
                "attributes": {"title": {"type": "string", "required": true}},
                "relationships": {
                    "author": {"key": "author", "relationship_type": "belongs_to", "record_type": "people"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(definition.record_type(), "articles");
        assert_eq!(definition.attributes()["title"].required, Some(true));
        assert_eq!(
            definition.relationships()["author"].record_type.as_deref(),
            Some("people")
        );
        assert!(definition.custom_schema().is_none());
    }

    #[test]
    fn test_definition_from_json_invalid() {
        let err = ResourceDefinition::from_json(r#"{"attributes": {}}"#).unwrap_err();
        assert!(matches!(err, DocsError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_builder_preserves_order() {
        let definition = ResourceDefinition::builder("articles")
            .attribute("title", AttributeDescriptor::new())
            .attribute("body", AttributeDescriptor::new().with_type("text"))
            .attribute("published", AttributeDescriptor::new().with_type("boolean"))
            .build();

        let names: Vec<&str> = definition.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["title", "body", "published"]);
    }
}
