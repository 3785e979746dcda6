//! Document model for JSON Schema draft 2020-12 documents.
//!
//! A schema is either a boolean literal or a keyword object. Every keyword
//! the builders can emit has a field on [`SchemaObject`]; absent fields are
//! omitted when serialized, so a default `SchemaObject` renders as `{}`.
//! Keywords read from JSON that have no field land in
//! [`SchemaObject::extra`].
//!
//! The model does not enforce that keywords match the declared [`Kind`]. A
//! string schema carrying `maxItems` is representable and is rendered as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::DocumentError;

/// Value of the `$schema` keyword attached to finalized documents.
pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Prefix of every `$ref` pointer into the document's `$defs` map.
pub const DEFS_POINTER_PREFIX: &str = "#/$defs/";

/// Ordered map used for every keyword keyed by name or pattern.
pub type SchemaMap = IndexMap<String, Schema>;

/// Reads a present keyword as `Some`, even when its value is `null`.
///
/// A plain `Option<Value>` field maps `null` to `None`, which would turn
/// `{"const": null}` into `{}`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Primitive or structural category a schema restricts values to.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::Kind;
///
/// assert_eq!(Kind::Integer.as_str(), "integer");
/// assert_eq!(serde_json::to_value(Kind::Null).unwrap(), "null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl Kind {
    /// Returns the keyword spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::Null => "null",
        }
    }
}

/// Contents of the `type` keyword: one kind or an ordered list of kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(Kind),
    Many(Vec<Kind>),
}

impl TypeSet {
    /// Returns the declared kinds in declaration order.
    pub fn kinds(&self) -> &[Kind] {
        match self {
            TypeSet::Single(kind) => std::slice::from_ref(kind),
            TypeSet::Many(kinds) => kinds,
        }
    }

    /// Returns `true` if `kind` is among the declared kinds.
    pub fn contains(&self, kind: Kind) -> bool {
        self.kinds().contains(&kind)
    }
}

impl From<Kind> for TypeSet {
    fn from(kind: Kind) -> Self {
        TypeSet::Single(kind)
    }
}

/// Format vocabulary of draft 2020-12 for string schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
    DateTime,
    Time,
    Date,
    Duration,
    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,
    Uuid,
    Uri,
    UriReference,
    Iri,
    IriReference,
    UriTemplate,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
}

/// Encodings accepted by the `contentEncoding` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentEncoding {
    #[serde(rename = "7bit")]
    SevenBit,
    #[serde(rename = "8bit")]
    EightBit,
    #[serde(rename = "binary")]
    Binary,
    #[serde(rename = "quoted-printable")]
    QuotedPrintable,
    #[serde(rename = "base16")]
    Base16,
    #[serde(rename = "base32")]
    Base32,
    #[serde(rename = "base64")]
    Base64,
}

/// Annotation keywords every schema kind may carry.
///
/// Flattened into [`SchemaObject`], and reused as the options type of the
/// kind constructors that take no kind-specific settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotations {
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
}

impl Annotations {
    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the example values.
    pub fn with_examples(mut self, examples: Vec<Value>) -> Self {
        self.examples = Some(examples);
        self
    }
}

/// Keyword object of a schema.
///
/// `$schema` is declared first so finalized documents serialize it as their
/// first field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObject {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(flatten)]
    pub annotations: Annotations,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "$anchor", skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeSet>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(
        rename = "const",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub const_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub if_schema: Option<Box<Schema>>,
    #[serde(rename = "then", skip_serializing_if = "Option::is_none")]
    pub then_schema: Option<Box<Schema>>,
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub else_schema: Option<Box<Schema>>,

    // String keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<ContentEncoding>,

    // Numeric keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<Number>,

    // Object keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<SchemaMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<SchemaMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unevaluated_properties: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_names: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_required: Option<IndexMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_schemas: Option<SchemaMap>,

    // Array keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_items: Option<Vec<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unevaluated_items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contains: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contains: Option<u64>,

    #[serde(rename = "$defs", skip_serializing_if = "Option::is_none")]
    pub defs: Option<SchemaMap>,

    /// Keywords with no dedicated field, such as vendor extensions.
    /// Kept in input order and rendered after the known keywords.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SchemaObject {
    /// Creates an object restricted to a single kind.
    pub fn of_kind(kind: Kind) -> Self {
        Self {
            kind: Some(TypeSet::Single(kind)),
            ..Default::default()
        }
    }

    /// Returns the declared kinds, or an empty slice when `type` is absent.
    pub fn kinds(&self) -> &[Kind] {
        self.kind.as_ref().map(TypeSet::kinds).unwrap_or_default()
    }
}

/// A schema: either a boolean literal or a keyword object.
///
/// `true` accepts every instance and `false` rejects every instance.
///
/// # Examples
///
/// ```
/// use json_schema_builder_core::{Kind, Schema, SchemaObject};
/// use serde_json::json;
///
/// let schema = Schema::from(SchemaObject::of_kind(Kind::String));
/// assert_eq!(schema.to_value(), json!({"type": "string"}));
///
/// assert_eq!(Schema::from(false).to_value(), json!(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    Bool(bool),
    Object(Box<SchemaObject>),
}

impl Schema {
    /// Parses a schema from a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::NotAFragment`] if `value` is neither a
    /// boolean nor an object, or [`DocumentError::Malformed`] if a keyword
    /// holds a value of the wrong shape.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Bool(literal) => Ok(Schema::Bool(literal)),
            Value::Object(_) => Ok(Schema::Object(Box::new(serde_json::from_value(value)?))),
            Value::Null => Err(DocumentError::NotAFragment("null")),
            Value::Number(_) => Err(DocumentError::NotAFragment("number")),
            Value::String(_) => Err(DocumentError::NotAFragment("string")),
            Value::Array(_) => Err(DocumentError::NotAFragment("array")),
        }
    }

    /// Converts the schema into a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] if serialization fails.
    pub fn try_to_value(&self) -> Result<Value, DocumentError> {
        match self {
            Schema::Bool(literal) => Ok(Value::Bool(*literal)),
            Schema::Object(object) => Ok(serde_json::to_value(object)?),
        }
    }

    /// Converts the schema into a JSON tree.
    ///
    /// Serialization cannot fail for this model: every map is keyed by
    /// strings and every number is a finite [`Number`]. The empty-object
    /// fallback is unreachable; use [`try_to_value`](Self::try_to_value) to
    /// observe the error instead.
    pub fn to_value(&self) -> Value {
        self.try_to_value().unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// Number of top-level keywords; `0` for boolean literals.
    pub fn keyword_count(&self) -> usize {
        match self.try_to_value() {
            Ok(Value::Object(map)) => map.len(),
            _ => 0,
        }
    }

    /// Returns the keyword object, or `None` for a boolean literal.
    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Schema::Bool(_) => None,
            Schema::Object(object) => Some(object.as_ref()),
        }
    }

    /// Returns `true` for boolean literal schemas.
    pub fn is_bool(&self) -> bool {
        matches!(self, Schema::Bool(_))
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::Object(Box::default())
    }
}

impl From<bool> for Schema {
    fn from(literal: bool) -> Self {
        Schema::Bool(literal)
    }
}

impl From<SchemaObject> for Schema {
    fn from(object: SchemaObject) -> Self {
        Schema::Object(Box::new(object))
    }
}

impl TryFrom<Value> for Schema {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Schema::from_value(value)
    }
}
