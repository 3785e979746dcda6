//! Property, definition and reference fragments.
//!
//! These builders return bare fragments without a `type` keyword. They are
//! meant to be merged into an object schema through
//! [`ObjectOptions`](crate::s::ObjectOptions), or combined with
//! [`properties`] into a standalone dependent schema.

use indexmap::IndexMap;
use json_schema_builder_core::{
    DEFS_POINTER_PREFIX, Kind, Schema, SchemaMap, SchemaObject, TypeSet,
};
use tracing::debug;

use crate::SchemaBuilder;

/// Options for [`property_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyOptions {
    /// Names that must also be present whenever this property is.
    pub depends_on: Option<Vec<String>>,
    /// Extra schema the whole object must satisfy whenever this property is
    /// present.
    pub dependent_schema: Option<SchemaBuilder>,
}

/// Options for [`required_property_with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequiredPropertyOptions {
    pub dependent_schema: Option<SchemaBuilder>,
}

fn single(name: String, schema: Schema) -> SchemaMap {
    IndexMap::from([(name, schema)])
}

fn property_object(
    name: &str,
    schema: SchemaBuilder,
    dependent_schema: Option<SchemaBuilder>,
) -> SchemaObject {
    SchemaObject {
        properties: Some(single(name.to_string(), schema.into_schema())),
        dependent_schemas: dependent_schema
            .map(|dependent| single(name.to_string(), dependent.into_schema())),
        ..Default::default()
    }
}

/// Optional property `name` constrained by `schema`.
pub fn property(name: impl Into<String>, schema: SchemaBuilder) -> SchemaBuilder {
    property_with(name, schema, PropertyOptions::default())
}

/// Optional property with dependent-required names and/or a dependent schema.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s::{self, PropertyOptions};
/// use serde_json::json;
///
/// let email = s::property_with(
///     "email",
///     s::string(),
///     PropertyOptions {
///         depends_on: Some(vec!["name".into()]),
///         ..Default::default()
///     },
/// );
///
/// assert_eq!(
///     email.to_schema().to_value(),
///     json!({
///         "properties": {"email": {"type": "string"}},
///         "dependentRequired": {"email": ["name"]}
///     })
/// );
/// ```
pub fn property_with(
    name: impl Into<String>,
    schema: SchemaBuilder,
    options: PropertyOptions,
) -> SchemaBuilder {
    let name = name.into();
    let mut object = property_object(&name, schema, options.dependent_schema);
    object.dependent_required = options
        .depends_on
        .map(|names| IndexMap::from([(name, names)]));
    SchemaBuilder::new(object)
}

/// Property `name` constrained by `schema` and listed in `required`.
pub fn required_property(name: impl Into<String>, schema: SchemaBuilder) -> SchemaBuilder {
    required_property_with(name, schema, RequiredPropertyOptions::default())
}

/// Required property with a dependent schema.
pub fn required_property_with(
    name: impl Into<String>,
    schema: SchemaBuilder,
    options: RequiredPropertyOptions,
) -> SchemaBuilder {
    let name = name.into();
    let object = property_object(&name, schema, options.dependent_schema);
    SchemaBuilder::new(SchemaObject {
        required: Some(vec![name]),
        ..object
    })
}

/// Properties whose names match `pattern` are constrained by `schema`.
pub fn pattern_property(pattern: impl Into<String>, schema: SchemaBuilder) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        pattern_properties: Some(single(pattern.into(), schema.into_schema())),
        ..Default::default()
    })
}

/// Merges property fragments into one fragment without a `type` keyword.
///
/// Used to build the value of a dependent schema.
pub fn properties(props: impl IntoIterator<Item = SchemaBuilder>) -> SchemaBuilder {
    props
        .into_iter()
        .fold(SchemaBuilder::default(), |combined, prop| combined.merged(&prop))
}

/// Registers `schema` under `name` in the document's `$defs`.
///
/// The fragment only reaches the finalized document if it is passed, via
/// `defs`, to the constructor whose result is finalized.
pub fn def(name: impl Into<String>, schema: SchemaBuilder) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        defs: Some(single(name.into(), schema.into_schema())),
        ..Default::default()
    })
}

/// `{"$ref": "#/$defs/<name>"}`. The name is not checked against any
/// registered definition.
pub fn reference(name: &str) -> SchemaBuilder {
    SchemaBuilder::new(SchemaObject {
        reference: Some(format!("{DEFS_POINTER_PREFIX}{name}")),
        ..Default::default()
    })
}

/// Widens the declared `type` to also admit `null`.
///
/// Returned unchanged when the fragment is a boolean literal, declares no
/// `type`, or already admits `null`. Schemas that restrict values only via
/// composition keywords are therefore not widened.
///
/// # Examples
///
/// ```
/// use json_schema_builder::s;
/// use serde_json::json;
///
/// let maybe_name = s::nullable(s::string());
/// assert_eq!(maybe_name.to_schema().to_value(), json!({"type": ["string", "null"]}));
///
/// let untouched = s::nullable(s::any_of([s::string(), s::integer()]));
/// assert!(untouched.to_schema().as_object().unwrap().kind.is_none());
/// ```
pub fn nullable(schema: SchemaBuilder) -> SchemaBuilder {
    let widened = match schema.as_schema() {
        Schema::Object(object) => match &object.kind {
            Some(kind) if !kind.contains(Kind::Null) => {
                let mut kinds = kind.kinds().to_vec();
                kinds.push(Kind::Null);
                Some(TypeSet::Many(kinds))
            }
            _ => None,
        },
        Schema::Bool(_) => None,
    };

    let Some(kind) = widened else {
        debug!("nullable leaves schema unchanged");
        return schema;
    };

    match schema.into_schema() {
        Schema::Object(mut object) => {
            object.kind = Some(kind);
            SchemaBuilder::new(Schema::Object(object))
        }
        literal @ Schema::Bool(_) => SchemaBuilder::new(literal),
    }
}
