//! Composition, conditional and value-restriction fragments.

use json_schema_builder_core::{Schema, SchemaObject};
use serde_json::Value;

use crate::SchemaBuilder;

fn collect(schemas: impl IntoIterator<Item = SchemaBuilder>) -> Option<Vec<Schema>> {
    Some(schemas.into_iter().map(SchemaBuilder::into_schema).collect())
}

fn boxed(builder: SchemaBuilder) -> Option<Box<Schema>> {
    Some(Box::new(builder.into_schema()))
}

/// `{"allOf": [...]}` in call order.
pub fn all_of(schemas: impl IntoIterator<Item = SchemaBuilder>) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        all_of: collect(schemas),
        ..Default::default()
    })
}

/// `{"anyOf": [...]}` in call order.
pub fn any_of(schemas: impl IntoIterator<Item = SchemaBuilder>) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        any_of: collect(schemas),
        ..Default::default()
    })
}

/// `{"oneOf": [...]}` in call order.
pub fn one_of(schemas: impl IntoIterator<Item = SchemaBuilder>) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        one_of: collect(schemas),
        ..Default::default()
    })
}

/// `{"not": schema}`.
pub fn not(schema: SchemaBuilder) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        not: boxed(schema),
        ..Default::default()
    })
}

/// `{"if": condition, "then": then}`.
pub fn if_then(condition: SchemaBuilder, then: SchemaBuilder) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        if_schema: boxed(condition),
        then_schema: boxed(then),
        ..Default::default()
    })
}

/// `{"if": condition, "then": then, "else": otherwise}`.
pub fn if_then_else(
    condition: SchemaBuilder,
    then: SchemaBuilder,
    otherwise: SchemaBuilder,
) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        if_schema: boxed(condition),
        then_schema: boxed(then),
        else_schema: boxed(otherwise),
        ..Default::default()
    })
}

/// Restricts the schema to exactly `value`.
pub fn constant(value: impl Into<Value>) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        const_value: Some(value.into()),
        ..Default::default()
    })
}

/// Restricts the schema to one of `values`, kept in order.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s;
/// use serde_json::json;
///
/// assert_eq!(
///     s::enumerator(["foo", "bar"]).to_schema().to_value(),
///     json!({"enum": ["foo", "bar"]})
/// );
/// assert_eq!(
///     s::enumerator([json!(1), json!("one"), json!(null)]).to_schema().to_value(),
///     json!({"enum": [1, "one", null]})
/// );
/// ```
pub fn enumerator<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        enum_values: Some(values.into_iter().map(Into::into).collect()),
        ..Default::default()
    })
}

/// The `true` schema: every instance is valid.
pub fn always_valid() -> SchemaBuilder {
    SchemaBuilder::new(true)
}

/// The `false` schema: no instance is valid.
pub fn always_invalid() -> SchemaBuilder {
    SchemaBuilder::new(false)
}
