//! The fixed JSON:API envelope every resource schema starts from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{Schema, SchemaType};

/// Root of a synthesized schema: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    /// The resource object schema.
    pub data: ResourceSchema,
}

/// Schema of the JSON:API resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    /// Always `object`.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Member schemas.
    pub properties: ResourceProperties,
    /// Example resource object.
    pub example: ResourceExample,
}

/// The four members of a resource object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceProperties {
    /// `id` member.
    pub id: Schema,
    /// `type` member.
    #[serde(rename = "type")]
    pub record_type: Schema,
    /// `attributes` member; an object schema.
    pub attributes: Schema,
    /// `relationships` member; an object schema.
    pub relationships: Schema,
}

/// Example payload mirroring [`ResourceProperties`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceExample {
    /// Example id.
    pub id: u64,
    /// The resource's record type.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Example attribute values.
    pub attributes: IndexMap<String, Value>,
    /// Example relationship linkage.
    pub relationships: IndexMap<String, Value>,
}

/// Build the empty envelope for `record_type`.
#[must_use]
pub fn build_skeleton(record_type: &str) -> ResourceSchema {
    ResourceSchema {
        schema_type: SchemaType::Object,
        properties: ResourceProperties {
            id: Schema::integer(),
            record_type: Schema::string(),
            attributes: Schema::object(),
            relationships: Schema::object(),
        },
        example: ResourceExample {
            id: 1,
            record_type: record_type.to_string(),
            attributes: IndexMap::new(),
            relationships: IndexMap::new(),
        },
    }
}
