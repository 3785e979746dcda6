//! The fragment builder every `s::*` function returns.
//!
//! A [`SchemaBuilder`] owns exactly one [`Schema`]. Parents never alias a
//! child: composing always merges a copy of the child's current fragment.

use json_schema_builder_core::{DRAFT_2020_12, Merge, Schema, SchemaObject};
use tracing::trace;

/// Holder of a partially built schema fragment.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s;
/// use serde_json::json;
///
/// let mut person = s::object();
/// person.merge_from(&s::properties([s::required_property("name", s::string())]));
///
/// assert_eq!(
///     person.to_schema().to_value(),
///     json!({
///         "type": "object",
///         "properties": {"name": {"type": "string"}},
///         "required": ["name"]
///     })
/// );
/// assert!(person.finalize().as_object().unwrap().schema.is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Wraps an initial fragment. No validation is performed.
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    /// Deep-merges `other`'s fragment into this one.
    ///
    /// Lists concatenate, maps merge key-wise, scalars take `other`'s value.
    /// A boolean literal on either side is replaced by `other` wholesale.
    pub fn merge_from(&mut self, other: &SchemaBuilder) {
        trace!(
            keywords = self.schema.keyword_count(),
            incoming_keywords = other.schema.keyword_count(),
            base_literal = self.schema.is_bool(),
            incoming_literal = other.schema.is_bool(),
            "merging schema fragment"
        );
        self.schema.merge(&other.schema);
        trace!(keywords = self.schema.keyword_count(), "merged schema fragment");
    }

    /// Owned form of [`merge_from`](Self::merge_from) for chaining.
    pub fn merged(mut self, other: &SchemaBuilder) -> Self {
        self.merge_from(other);
        self
    }

    /// Returns the current fragment without the `$schema` marker.
    pub fn as_schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns a copy of the current fragment without the `$schema` marker.
    pub fn to_schema(&self) -> Schema {
        self.schema.clone()
    }

    /// Consumes the builder, returning its fragment.
    pub fn into_schema(self) -> Schema {
        self.schema
    }

    /// Returns the fragment as a top-level document.
    ///
    /// Keyword objects get `$schema` set to the draft 2020-12 URI, replacing
    /// any value already present. Boolean literals are returned unchanged.
    pub fn finalize(&self) -> Schema {
        match &self.schema {
            Schema::Bool(literal) => Schema::Bool(*literal),
            Schema::Object(object) => {
                trace!("finalizing schema document");
                Schema::from(SchemaObject {
                    schema: Some(DRAFT_2020_12.to_string()),
                    ..object.as_ref().clone()
                })
            }
        }
    }
}

impl From<Schema> for SchemaBuilder {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

impl From<SchemaObject> for SchemaBuilder {
    fn from(object: SchemaObject) -> Self {
        Self::new(object)
    }
}

impl From<bool> for SchemaBuilder {
    fn from(literal: bool) -> Self {
        Self::new(literal)
    }
}
