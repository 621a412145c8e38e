//! # jsonapi-docs
//!
//! JSON:API resource schema synthesis for API documentation.
//!
//! Given a resource model's serialization metadata, this crate derives a
//! JSON-Schema-shaped description of the resource object with example
//! payloads:
//!
//! - **Attributes**: type, example, enum and required list per attribute
//! - **Relationships**: resource identifier or identifier collection per key
//! - **Examples**: a complete example `data` object alongside the schema
//! - **Overrides**: a model-supplied fragment deep-merged over the result
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_docs::{fixtures, synthesize_schema, Endpoint};
//! use serde_json::json;
//!
//! let tree = synthesize_schema(&fixtures::articles(), &Endpoint::new("GET", "/articles"))?;
//!
//! assert_eq!(
//!     tree.pointer("/data/properties/attributes/properties/title"),
//!     Some(&json!({"type": "string", "example": "Example string"}))
//! );
//! # Ok::<(), jsonapi_docs::DocsError>(())
//! ```
//!
//! ## Output Shape
//!
//! ```text
//! data
//! ├── type: object
//! ├── properties
//! │   ├── id: {type: integer}
//! │   ├── type: {type: string}
//! │   ├── attributes: {type: object, properties: {...}, required: [...]}
//! │   └── relationships: {type: object, properties: {...}}
//! └── example: {id: 1, type, attributes: {...}, relationships: {...}}
//! ```
//!
//! ## Collaborators
//!
//! - [`ColumnCatalog`]: persisted column types used as attribute type defaults
//! - [`FakeData`]: random slug-cased words for `object` examples
//! - [`ExampleSettings`]: RNG seed and clock for reproducible examples

mod attributes;
mod columns;
mod error;
mod example;
pub mod fixtures;
mod merge;
mod model;
mod relationships;
mod schema;
mod skeleton;
mod synthesizer;

pub use attributes::{enrich_attributes, resolve_attributes, ResolvedAttribute, DEFAULT_TYPE_TAG};
pub use columns::{Column, ColumnCatalog, StaticColumnCatalog};
pub use error::{DocsError, DocsResult};
pub use example::{
    ExampleProvider, ExampleSettings, FakeData, WordFaker, EXAMPLE_STRING, EXAMPLE_TEXT,
};
pub use merge::deep_merge;
pub use model::{
    AttributeDescriptor, Endpoint, RelationshipDescriptor, RelationshipKind, ResourceDefinition,
    ResourceDefinitionBuilder, ResourceModel,
};
pub use relationships::{
    enrich_relationships, resolve_relationships, resource_identifier, Cardinality,
    ResolvedRelationship,
};
pub use schema::{Schema, SchemaType, UnknownSchemaType};
pub use skeleton::{
    build_skeleton, ResourceDocument, ResourceExample, ResourceProperties, ResourceSchema,
};
pub use synthesizer::{synthesize_schema, SchemaSynthesizer, SchemaTree};
