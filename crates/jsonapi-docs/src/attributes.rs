//! Attribute resolution and enrichment.
//!
//! Resolution merges the model's attribute registry with the column
//! catalogue (when one is available) into one [`ResolvedAttribute`] per
//! rendered attribute. Enrichment writes those into the `attributes` branch
//! of both the schema and the example.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::columns::{Column, ColumnCatalog};
use crate::error::{DocsError, DocsResult};
use crate::example::ExampleProvider;
use crate::model::{AttributeDescriptor, ResourceModel};
use crate::schema::{Schema, SchemaType};
use crate::skeleton::ResourceSchema;

/// Type tag assumed when neither the registry nor a column declares one.
pub const DEFAULT_TYPE_TAG: &str = "string";

/// Final view of one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttribute {
    /// Resolved type.
    pub schema_type: SchemaType,
    /// Explicit example, if any was documented.
    pub example: Option<Value>,
    /// Whether the attribute is required.
    pub required: bool,
    /// Allowed values, if documented.
    pub enum_values: Option<Vec<Value>>,
}

/// Resolve every attribute the model renders.
///
/// Registry documentation wins over column documentation. A matching
/// column's storage type replaces the `string` default. Columns that are not
/// in the registry are ignored, and registry order is kept.
pub fn resolve_attributes<M>(
    model: &M,
    catalog: Option<&dyn ColumnCatalog>,
) -> DocsResult<IndexMap<String, ResolvedAttribute>>
where
    M: ResourceModel + ?Sized,
{
    let columns: IndexMap<String, Column> = catalog
        .and_then(|catalog| catalog.columns_for(model.record_type()))
        .map(|columns| {
            columns
                .into_iter()
                .map(|column| (column.name.clone(), column))
                .collect()
        })
        .unwrap_or_default();

    if catalog.is_some() {
        debug!(
            record_type = model.record_type(),
            columns = columns.len(),
            "Merging column catalogue into attribute registry"
        );
    }

    model
        .attributes()
        .iter()
        .map(|(name, descriptor)| {
            let resolved = resolve_attribute(name, descriptor, columns.get(name))?;
            Ok((name.clone(), resolved))
        })
        .collect()
}

fn resolve_attribute(
    name: &str,
    descriptor: &AttributeDescriptor,
    column: Option<&Column>,
) -> DocsResult<ResolvedAttribute> {
    let descriptor = match column.and_then(|column| column.documentation.as_ref()) {
        Some(documentation) => descriptor.clone().or(documentation),
        None => descriptor.clone(),
    };

    let type_tag = descriptor
        .type_tag
        .as_deref()
        .or_else(|| column.map(|column| column.storage_type.as_str()))
        .unwrap_or(DEFAULT_TYPE_TAG);

    let schema_type = type_tag
        .parse::<SchemaType>()
        .map_err(|_| DocsError::unsupported_type(name, type_tag))?;

    debug!(
        attribute = name,
        schema_type = %schema_type,
        from_column = column.is_some(),
        "Resolved attribute"
    );

    Ok(ResolvedAttribute {
        schema_type,
        example: descriptor.example,
        required: descriptor.required.unwrap_or(false),
        enum_values: descriptor.enum_values,
    })
}

/// Write resolved attributes into the schema and example branches.
///
/// Attributes without an explicit example get one from `examples`; required
/// attributes are appended to `required` in order.
pub fn enrich_attributes(
    schema: &mut ResourceSchema,
    attributes: &IndexMap<String, ResolvedAttribute>,
    examples: &mut ExampleProvider,
) {
    for (name, attribute) in attributes {
        let example = attribute
            .example
            .clone()
            .unwrap_or_else(|| examples.example_for(attribute.schema_type));

        let mut property = Schema::of_type(attribute.schema_type).with_example(example.clone());
        if let Some(values) = &attribute.enum_values {
            property = property.with_enum(values.clone());
        }

        let branch = &mut schema.properties.attributes;
        branch.insert_property(name.clone(), property);
        if attribute.required && !branch.required.contains(name) {
            branch.push_required(name.clone());
        }

        schema.example.attributes.insert(name.clone(), example);
    }
}
