//! Schema node types.
//!
//! [`SchemaType`] is the closed set of type tags understood by the
//! documentation output, and [`Schema`] is a single node of the generated
//! tree. Only the keywords the JSON:API documentation needs are modelled:
//! `type`, `properties`, `required`, `items`, `example` and `enum`.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag of a schema node.
///
/// Covers both the structural JSON types used by the envelope (`object`,
/// `array`, `integer`, `string`) and the storage-flavoured tags attributes may
/// declare (`text`, `datetime`, `uuid`, ...). Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Integer number.
    Integer,
    /// Short string.
    String,
    /// Long text.
    Text,
    /// Case-insensitive text.
    Citext,
    /// Floating point number.
    Float,
    /// Calendar date.
    Date,
    /// Timestamp with offset.
    Datetime,
    /// Time of day, rendered like a timestamp.
    Time,
    /// Nested object.
    Object,
    /// Sequence of values.
    Array,
    /// Boolean flag.
    Boolean,
    /// UUID string.
    Uuid,
}

impl SchemaType {
    /// Every supported tag, in declaration order.
    pub const ALL: [SchemaType; 12] = [
        Self::Integer,
        Self::String,
        Self::Text,
        Self::Citext,
        Self::Float,
        Self::Date,
        Self::Datetime,
        Self::Time,
        Self::Object,
        Self::Array,
        Self::Boolean,
        Self::Uuid,
    ];

    /// The lower-case tag as written in the schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Text => "text",
            Self::Citext => "citext",
            Self::Float => "float",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Object => "object",
            Self::Array => "array",
            Self::Boolean => "boolean",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tag is not one of [`SchemaType::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSchemaType(pub String);

impl fmt::Display for UnknownSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown schema type: {}", self.0)
    }
}

impl std::error::Error for UnknownSchemaType {}

impl FromStr for SchemaType {
    type Err = UnknownSchemaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| UnknownSchemaType(s.to_string()))
    }
}

/// A node of the generated schema tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    /// Object properties. `Some` with an empty map renders as `{}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Required properties, omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Array item schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Example value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Allowed values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,
}

impl Schema {
    /// Create a schema with only a type.
    #[must_use]
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// Create a string schema.
    #[must_use]
    pub fn string() -> Self {
        Self::of_type(SchemaType::String)
    }

    /// Create an integer schema.
    #[must_use]
    pub fn integer() -> Self {
        Self::of_type(SchemaType::Integer)
    }

    /// Create an object schema with an empty property map.
    #[must_use]
    pub fn object() -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            properties: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    /// Create an array schema with the given item schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Add a property to an object schema.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.insert_property(name, schema);
        self
    }

    /// Insert or replace a property in place, returning the previous one.
    pub fn insert_property(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema)
    }

    /// Mark a property as required.
    pub fn push_required(&mut self, name: impl Into<String>) {
        self.required.push(name.into());
    }

    /// Set the example value.
    #[must_use]
    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Set the allowed values.
    #[must_use]
    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// Look up a property by name.
    pub fn get_property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref().and_then(|props| props.get(name))
    }
}
