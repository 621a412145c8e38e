//! Relationship resolution and enrichment.

use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::{DocsError, DocsResult};
use crate::model::{RelationshipDescriptor, ResourceModel};
use crate::schema::Schema;
use crate::skeleton::ResourceSchema;

/// Whether a relationship links one resource or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// A single resource identifier.
    Single,
    /// An array of resource identifiers.
    Collection,
}

/// Final view of one relationship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelationship {
    /// Single or collection linkage.
    pub cardinality: Cardinality,
    /// `type` of the related resource in examples.
    pub related_type: String,
}

impl ResolvedRelationship {
    /// Resolve one descriptor rendered under `key`.
    pub fn from_descriptor(key: &str, descriptor: &RelationshipDescriptor) -> DocsResult<Self> {
        let related_type = descriptor
            .related_type()
            .ok_or_else(|| DocsError::unresolved_relationship(key))?;

        let cardinality = if descriptor.relationship_type.is_collection() {
            Cardinality::Collection
        } else {
            Cardinality::Single
        };

        Ok(Self {
            cardinality,
            related_type: related_type.to_string(),
        })
    }

    /// Schema of the relationship object: `{type: object, properties: {data: ...}}`.
    #[must_use]
    pub fn schema(&self) -> Schema {
        let data = match self.cardinality {
            Cardinality::Single => resource_identifier(),
            Cardinality::Collection => Schema::array(resource_identifier()),
        };
        Schema::object().property("data", data)
    }

    /// Example relationship object: `{data: {id, type}}` or `{data: [{id, type}]}`.
    #[must_use]
    pub fn example(&self) -> Value {
        let identifier = json!({"id": 1, "type": self.related_type});
        match self.cardinality {
            Cardinality::Single => json!({ "data": identifier }),
            Cardinality::Collection => json!({ "data": [identifier] }),
        }
    }
}

/// Schema of a resource identifier object.
#[must_use]
pub fn resource_identifier() -> Schema {
    Schema::object()
        .property("id", Schema::integer())
        .property("type", Schema::string())
}

/// Resolve the model's relationships keyed by rendering key.
///
/// Associations sharing a rendering key collapse into one entry; the last
/// one declared wins and keeps the position of the first.
pub fn resolve_relationships<M>(model: &M) -> DocsResult<IndexMap<String, ResolvedRelationship>>
where
    M: ResourceModel + ?Sized,
{
    let mut by_key: IndexMap<&str, &RelationshipDescriptor> = IndexMap::new();
    for (association, descriptor) in model.relationships() {
        let key = descriptor.rendering_key(association);
        if by_key.insert(key, descriptor).is_some() {
            warn!(
                record_type = model.record_type(),
                key,
                association = association.as_str(),
                "Relationship key already rendered; overwriting"
            );
        }
    }

    by_key
        .into_iter()
        .map(|(key, descriptor)| {
            let resolved = ResolvedRelationship::from_descriptor(key, descriptor)?;
            debug!(
                key,
                related_type = resolved.related_type.as_str(),
                cardinality = ?resolved.cardinality,
                "Resolved relationship"
            );
            Ok((key.to_string(), resolved))
        })
        .collect()
}

/// Write resolved relationships into the schema and example branches.
pub fn enrich_relationships(
    schema: &mut ResourceSchema,
    relationships: &IndexMap<String, ResolvedRelationship>,
) {
    for (key, relationship) in relationships {
        schema
            .properties
            .relationships
            .insert_property(key.clone(), relationship.schema());
        schema
            .example
            .relationships
            .insert(key.clone(), relationship.example());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResourceDefinition;
    use crate::skeleton::build_skeleton;

    #[test]
    fn test_singular_relationship() {
        let rel = ResolvedRelationship::from_descriptor(
            "author",
            &RelationshipDescriptor::belongs_to("author").record_type("people"),
        )
        .unwrap();

        assert_eq!(rel.cardinality, Cardinality::Single);
        assert_eq!(
            serde_json::to_value(rel.schema()).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "data": {
                        "type": "object",
                        "properties": {"id": {"type": "integer"}, "type": {"type": "string"}}
                    }
                }
            })
        );
        assert_eq!(rel.example(), json!({"data": {"id": 1, "type": "people"}}));
    }

    #[test]
    fn test_collection_relationship() {
        let rel = ResolvedRelationship::from_descriptor(
            "comments",
            &RelationshipDescriptor::has_many("comments").static_record_type("comments"),
        )
        .unwrap();

        assert_eq!(rel.cardinality, Cardinality::Collection);
        let schema = serde_json::to_value(rel.schema()).unwrap();
        assert_eq!(schema["properties"]["data"]["type"], json!("array"));
        assert_eq!(
            schema["properties"]["data"]["items"],
            serde_json::to_value(resource_identifier()).unwrap()
        );
        assert_eq!(rel.example(), json!({"data": [{"id": 1, "type": "comments"}]}));
    }

    #[test]
    fn test_has_one_is_singular() {
        let rel = ResolvedRelationship::from_descriptor(
            "cover",
            &RelationshipDescriptor::has_one("cover").object_method_name("cover_image"),
        )
        .unwrap();

        assert_eq!(rel.cardinality, Cardinality::Single);
        assert_eq!(rel.example(), json!({"data": {"id": 1, "type": "cover_image"}}));
    }

    #[test]
    fn test_unresolved_type_fails() {
        let model = ResourceDefinition::builder("articles")
            .relationship("author", RelationshipDescriptor::belongs_to("author"))
            .build();

        let err = resolve_relationships(&model).unwrap_err();
        assert!(matches!(err, DocsError::UnresolvedRelationshipType { ref key } if key == "author"));
    }

    #[test]
    fn test_shared_key_last_wins() {
        let model = ResourceDefinition::builder("articles")
            .relationship(
                "writer",
                RelationshipDescriptor::belongs_to("author").record_type("writers"),
            )
            .relationship(
                "editor",
                RelationshipDescriptor::has_many("editors").record_type("people"),
            )
            .relationship(
                "author",
                RelationshipDescriptor::belongs_to("author").record_type("people"),
            )
            .build();

        let resolved = resolve_relationships(&model).unwrap();
        let keys: Vec<&str> = resolved.keys().map(String::as_str).collect();
        assert_eq!(keys, ["author", "editors"]);
        assert_eq!(resolved["author"].related_type, "people");
    }

    #[test]
    fn test_overwritten_unresolvable_descriptor_is_ignored() {
        let model = ResourceDefinition::builder("articles")
            .relationship("writer", RelationshipDescriptor::belongs_to("author"))
            .relationship(
                "author",
                RelationshipDescriptor::belongs_to("author").record_type("people"),
            )
            .build();

        assert!(resolve_relationships(&model).is_ok());
    }

    #[test]
    fn test_enrich_writes_both_branches() {
        let model = ResourceDefinition::builder("articles")
            .relationship(
                "author",
                RelationshipDescriptor::belongs_to("author").record_type("people"),
            )
            .build();

        let mut schema = build_skeleton("articles");
        let resolved = resolve_relationships(&model).unwrap();
        enrich_relationships(&mut schema, &resolved);

        assert!(schema.properties.relationships.get_property("author").is_some());
        assert_eq!(
            schema.example.relationships["author"],
            json!({"data": {"id": 1, "type": "people"}})
        );
    }
}
