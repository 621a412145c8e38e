//! Test fixtures for jsonapi-docs development and testing.
//!
//! Pre-built resource definitions and column catalogues shared by unit tests,
//! integration tests and documentation examples.
//!
//! # Example
//!
//! ```
//! use jsonapi_docs::{fixtures, ResourceModel};
//!
//! let articles = fixtures::articles();
//! assert_eq!(articles.record_type(), "articles");
//! ```

use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::json;

use crate::columns::{Column, StaticColumnCatalog};
use crate::example::ExampleSettings;
use crate::model::{AttributeDescriptor, RelationshipDescriptor, ResourceDefinition};

/// Minimal `articles` resource: a required `title` and an `author`.
///
/// ```
/// use jsonapi_docs::{fixtures, ResourceModel};
///
/// let articles = fixtures::articles();
/// assert!(articles.attributes().contains_key("title"));
/// assert!(articles.relationships().contains_key("author"));
/// ```
#[must_use]
pub fn articles() -> ResourceDefinition {
    ResourceDefinition::builder("articles")
        .attribute("title", AttributeDescriptor::new().with_type("string").required())
        .relationship(
            "author",
            RelationshipDescriptor::belongs_to("author").record_type("people"),
        )
        .build()
}

/// The `articles` resource with a to-many `author` relationship.
#[must_use]
pub fn articles_with_many_authors() -> ResourceDefinition {
    ResourceDefinition::builder("articles")
        .attribute("title", AttributeDescriptor::new().with_type("string").required())
        .relationship(
            "author",
            RelationshipDescriptor::has_many("author").record_type("people"),
        )
        .build()
}

/// A blog post exercising every supported attribute type, enum values,
/// explicit examples and all relationship fallbacks.
#[must_use]
pub fn blog_post() -> ResourceDefinition {
    ResourceDefinition::builder("posts")
        .attribute("title", AttributeDescriptor::new().with_type("string").required())
        .attribute("body", AttributeDescriptor::new().with_type("text"))
        .attribute("slug", AttributeDescriptor::new().with_type("citext").required())
        .attribute("views", AttributeDescriptor::new().with_type("integer"))
        .attribute("rating", AttributeDescriptor::new().with_type("float"))
        .attribute("published_on", AttributeDescriptor::new().with_type("date"))
        .attribute("updated_at", AttributeDescriptor::new().with_type("datetime"))
        .attribute("reminder_at", AttributeDescriptor::new().with_type("time"))
        .attribute("metadata", AttributeDescriptor::new().with_type("object"))
        .attribute("tags", AttributeDescriptor::new().with_type("array"))
        .attribute("featured", AttributeDescriptor::new().with_type("boolean"))
        .attribute("uuid", AttributeDescriptor::new().with_type("uuid"))
        .attribute(
            "status",
            AttributeDescriptor::new()
                .with_type("string")
                .with_example("draft")
                .with_enum(["draft", "review", "published"]),
        )
        .relationship(
            "author",
            RelationshipDescriptor::belongs_to("author").record_type("people"),
        )
        .relationship(
            "comments",
            RelationshipDescriptor::has_many("comments").static_record_type("comments"),
        )
        .relationship(
            "cover",
            RelationshipDescriptor::has_one("cover").object_method_name("cover_image"),
        )
        .build()
}

/// A `people` resource whose attributes carry no types; pair with
/// [`people_columns`].
#[must_use]
pub fn people() -> ResourceDefinition {
    ResourceDefinition::builder("people")
        .attribute("name", AttributeDescriptor::new().required())
        .attribute("born_on", AttributeDescriptor::new())
        .attribute("karma", AttributeDescriptor::new().with_example(42))
        .attribute("nickname", AttributeDescriptor::new().with_type("text"))
        .custom_schema(json!({
            "data": {"properties": {"attributes": {"properties": {"name": {"type": "text"}}}}}
        }))
        .build()
}

/// Column catalogue for [`people`]: typed columns plus one that is not
/// serialized.
#[must_use]
pub fn people_columns() -> StaticColumnCatalog {
    StaticColumnCatalog::new().table(
        "people",
        vec![
            Column::new("id", "integer"),
            Column::new("name", "string"),
            Column::new("born_on", "date"),
            Column::new("karma", "integer"),
            Column::new("nickname", "string"),
            Column::new("password_digest", "string"),
        ],
    )
}

/// A fixed clock: 2024-05-17 09:15:00 +01:00.
#[must_use]
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .and_then(|offset| offset.with_ymd_and_hms(2024, 5, 17, 9, 15, 0).single())
        .unwrap_or_default()
}

/// Fully deterministic example settings.
#[must_use]
pub fn deterministic_examples() -> ExampleSettings {
    ExampleSettings::seeded(20_240_517).with_now(fixed_now())
}
