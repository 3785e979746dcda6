//! Kind constructors and their options.
//!
//! Each constructor injects the fixed `type` keyword and copies the options
//! through unchanged. Only [`object_with`] and [`array_with`] do any
//! assembly: they merge child builders into the growing fragment in order.
//!
//! Every options field is optional; an absent field is omitted from the
//! output rather than defaulted.

use json_schema_builder_core::{
    Annotations, ContentEncoding, Kind, Schema, SchemaObject, StringFormat,
};
use serde_json::Number;
use tracing::debug;

use crate::SchemaBuilder;

/// Options for [`string_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringOptions {
    pub annotations: Annotations,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub format: Option<StringFormat>,
    pub content_media_type: Option<String>,
    pub content_encoding: Option<ContentEncoding>,
}

/// Options for [`integer_with`] and [`number_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericOptions {
    pub annotations: Annotations,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub exclusive_minimum: Option<Number>,
    pub exclusive_maximum: Option<Number>,
    pub multiple_of: Option<Number>,
}

impl NumericOptions {
    /// Sets an inclusive `[minimum, maximum]` range.
    pub fn range(minimum: impl Into<Number>, maximum: impl Into<Number>) -> Self {
        Self {
            minimum: Some(minimum.into()),
            maximum: Some(maximum.into()),
            ..Default::default()
        }
    }
}

/// Options for [`object_with`].
///
/// `properties` and `pattern_properties` take fragments produced by
/// [`property`](crate::s::property), [`required_property`](crate::s::required_property)
/// and [`pattern_property`](crate::s::pattern_property). `defs` takes
/// fragments produced by [`def`](crate::s::def).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectOptions {
    pub annotations: Annotations,
    pub properties: Vec<SchemaBuilder>,
    pub pattern_properties: Vec<SchemaBuilder>,
    /// Pattern every property name must match. Empty means unset.
    pub property_names: Option<String>,
    pub additional_properties: Option<SchemaBuilder>,
    pub unevaluated_properties: Option<bool>,
    pub min_properties: Option<u64>,
    pub max_properties: Option<u64>,
    pub defs: Vec<SchemaBuilder>,
}

/// Rule for `items` and `unevaluatedItems`: a literal or a nested schema.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsRule {
    Bool(bool),
    Schema(SchemaBuilder),
}

impl ItemsRule {
    fn into_schema(self) -> Schema {
        match self {
            ItemsRule::Bool(literal) => Schema::Bool(literal),
            ItemsRule::Schema(builder) => builder.into_schema(),
        }
    }
}

impl From<bool> for ItemsRule {
    fn from(literal: bool) -> Self {
        ItemsRule::Bool(literal)
    }
}

impl From<SchemaBuilder> for ItemsRule {
    fn from(builder: SchemaBuilder) -> Self {
        ItemsRule::Schema(builder)
    }
}

/// Containment rule: at least `min` and at most `max` items match `schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct Contains {
    pub schema: SchemaBuilder,
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl Contains {
    /// Containment with no occurrence bounds.
    pub fn new(schema: SchemaBuilder) -> Self {
        Self {
            schema,
            min: None,
            max: None,
        }
    }
}

/// Options for [`array_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayOptions {
    pub annotations: Annotations,
    /// `false` forbids items beyond `prefix_items`; `None` leaves them open.
    pub items: Option<ItemsRule>,
    pub prefix_items: Vec<SchemaBuilder>,
    pub unevaluated_items: Option<ItemsRule>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
    pub contains: Option<Contains>,
    pub defs: Vec<SchemaBuilder>,
}

fn kind_object(kind: Kind, annotations: Annotations) -> SchemaObject {
    SchemaObject {
        annotations,
        ..SchemaObject::of_kind(kind)
    }
}

/// `{"type": "string"}`.
pub fn string() -> SchemaBuilder {
    string_with(StringOptions::default())
}

/// String schema with length, pattern, format and content constraints.
pub fn string_with(options: StringOptions) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        min_length: options.min_length,
        max_length: options.max_length,
        pattern: options.pattern,
        format: options.format,
        content_media_type: options.content_media_type,
        content_encoding: options.content_encoding,
        ..kind_object(Kind::String, options.annotations)
    })
}

fn numeric(kind: Kind, options: NumericOptions) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        minimum: options.minimum,
        maximum: options.maximum,
        exclusive_minimum: options.exclusive_minimum,
        exclusive_maximum: options.exclusive_maximum,
        multiple_of: options.multiple_of,
        ..kind_object(kind, options.annotations)
    })
}

/// `{"type": "integer"}`.
pub fn integer() -> SchemaBuilder {
    integer_with(NumericOptions::default())
}

/// Integer schema with range and multiple-of constraints.
pub fn integer_with(options: NumericOptions) -> SchemaBuilder {
    numeric(Kind::Integer, options)
}

/// `{"type": "number"}`.
pub fn number() -> SchemaBuilder {
    number_with(NumericOptions::default())
}

/// Number schema with range and multiple-of constraints.
pub fn number_with(options: NumericOptions) -> SchemaBuilder {
    numeric(Kind::Number, options)
}

/// `{"type": "boolean"}`.
pub fn boolean() -> SchemaBuilder {
    boolean_with(Annotations::default())
}

/// Boolean schema carrying only annotations.
pub fn boolean_with(annotations: Annotations) -> SchemaBuilder {
    SchemaBuilder::new(kind_object(Kind::Boolean, annotations))
}

/// `{"type": "null"}`.
pub fn null() -> SchemaBuilder {
    null_with(Annotations::default())
}

/// Null schema carrying only annotations.
pub fn null_with(annotations: Annotations) -> SchemaBuilder {
    SchemaBuilder::new(kind_object(Kind::Null, annotations))
}

/// `{"type": "object"}`.
pub fn object() -> SchemaBuilder {
    object_with(ObjectOptions::default())
}

/// Object schema assembled from property, pattern-property and definition
/// fragments.
///
/// Fragments are merged in the order given: properties, then pattern
/// properties, then the property-name pattern, additional properties, and
/// finally definitions. Repeated `required` names are kept as-is.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s::{self, ObjectOptions};
/// use serde_json::json;
///
/// let schema = s::object_with(ObjectOptions {
///     properties: vec![
///         s::required_property("name", s::string()),
///         s::property("nickname", s::string()),
///     ],
///     min_properties: Some(1),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     schema.to_schema().to_value(),
///     json!({
///         "type": "object",
///         "minProperties": 1,
///         "properties": {"name": {"type": "string"}, "nickname": {"type": "string"}},
///         "required": ["name"]
///     })
/// );
/// ```
pub fn object_with(options: ObjectOptions) -> SchemaBuilder {
    let ObjectOptions {
        annotations,
        properties,
        pattern_properties,
        property_names,
        additional_properties,
        unevaluated_properties,
        min_properties,
        max_properties,
        defs,
    } = options;

    debug!(
        properties = properties.len(),
        pattern_properties = pattern_properties.len(),
        defs = defs.len(),
        "assembling object schema"
    );

    let mut schema = SchemaBuilder::new(SchemaObject {
        unevaluated_properties: unevaluated_properties.map(|rule| Box::new(Schema::Bool(rule))),
        min_properties,
        max_properties,
        ..kind_object(Kind::Object, annotations)
    });

    for property in properties.iter().chain(&pattern_properties) {
        schema.merge_from(property);
    }

    // An empty pattern is treated as unset.
    if let Some(pattern) = property_names.filter(|pattern| !pattern.is_empty()) {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            property_names: Some(Box::new(Schema::from(SchemaObject {
                pattern: Some(pattern),
                ..Default::default()
            }))),
            ..Default::default()
        }));
    }

    if let Some(additional) = additional_properties {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            additional_properties: Some(Box::new(additional.into_schema())),
            ..Default::default()
        }));
    }

    for def in &defs {
        schema.merge_from(def);
    }

    schema
}

/// `{"type": "array"}`.
pub fn array() -> SchemaBuilder {
    array_with(ArrayOptions::default())
}

/// Array schema with item, tuple, containment and definition rules.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s::{self, ArrayOptions};
/// use serde_json::json;
///
/// let pair = s::array_with(ArrayOptions {
///     prefix_items: vec![s::string(), s::integer()],
///     items: Some(false.into()),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     pair.to_schema().to_value(),
///     json!({
///         "type": "array",
///         "items": false,
///         "prefixItems": [{"type": "string"}, {"type": "integer"}]
///     })
/// );
/// ```
pub fn array_with(options: ArrayOptions) -> SchemaBuilder {
    let ArrayOptions {
        annotations,
        items,
        prefix_items,
        unevaluated_items,
        min_items,
        max_items,
        unique_items,
        contains,
        defs,
    } = options;

    debug!(
        prefix_items = prefix_items.len(),
        defs = defs.len(),
        "assembling array schema"
    );

    let mut schema = SchemaBuilder::new(SchemaObject {
        min_items,
        max_items,
        unique_items,
        ..kind_object(Kind::Array, annotations)
    });

    if let Some(items) = items {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            items: Some(Box::new(items.into_schema())),
            ..Default::default()
        }));
    }

    for item in prefix_items {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            prefix_items: Some(vec![item.into_schema()]),
            ..Default::default()
        }));
    }

    if let Some(unevaluated) = unevaluated_items {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            unevaluated_items: Some(Box::new(unevaluated.into_schema())),
            ..Default::default()
        }));
    }

    if let Some(Contains {
        schema: contained,
        min,
        max,
    }) = contains
    {
        schema.merge_from(&SchemaBuilder::new(SchemaObject {
            contains: Some(Box::new(contained.into_schema())),
            min_contains: min,
            max_contains: max,
            ..Default::default()
        }));
    }

    for def in &defs {
        schema.merge_from(def);
    }

    schema
}
