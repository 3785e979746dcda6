//! Fluent construction of JSON Schema draft 2020-12 documents.
//!
//! Every entry point lives in [`s`] and returns a [`SchemaBuilder`]:
//!
//! - kinds: [`s::string`], [`s::integer`], [`s::number`], [`s::boolean`],
//!   [`s::null`], [`s::object_with`], [`s::array_with`] (each with a `_with`
//!   variant taking options);
//! - structure: [`s::property`], [`s::required_property`],
//!   [`s::pattern_property`], [`s::properties`], [`s::def`],
//!   [`s::reference`], [`s::nullable`];
//! - composition: [`s::all_of`], [`s::any_of`], [`s::one_of`], [`s::not`],
//!   [`s::if_then`], [`s::if_then_else`];
//! - values: [`s::constant`], [`s::enumerator`], [`s::always_valid`],
//!   [`s::always_invalid`].
//!
//! [`SchemaBuilder::finalize`] attaches the `$schema` marker for top-level
//! use. Nothing is validated: misuse produces a well-formed but incoherent
//! document, to be caught by an external validator.
//!
//! # Example
//!
//! ```
//! use json_schema_builder::s::{self, ObjectOptions, StringOptions};
//! use json_schema_builder::{StringFormat, DRAFT_2020_12};
//! use serde_json::json;
//!
//! let email = s::def(
//!     "email",
//!     s::string_with(StringOptions {
//!         format: Some(StringFormat::Email),
//!         ..Default::default()
//!     }),
//! );
//!
//! let contact = s::object_with(ObjectOptions {
//!     properties: vec![
//!         s::required_property("name", s::string()),
//!         s::property("email", s::reference("email")),
//!     ],
//!     defs: vec![email],
//!     ..Default::default()
//! });
//!
//! assert_eq!(
//!     contact.finalize().to_value(),
//!     json!({
//!         "$schema": DRAFT_2020_12,
//!         "type": "object",
//!         "properties": {
//!             "name": {"type": "string"},
//!             "email": {"$ref": "#/$defs/email"}
//!         },
//!         "required": ["name"],
//!         "$defs": {"email": {"type": "string", "format": "email"}}
//!     })
//! );
//! ```

mod builder;
mod compose;
mod error;
mod kinds;
mod output;
mod properties;

pub use builder::SchemaBuilder;
pub use error::{BuildError, Result};
pub use json_schema_builder_core::{
    Annotations, ContentEncoding, DEFS_POINTER_PREFIX, DRAFT_2020_12, DocumentError, Kind, Merge,
    Schema, SchemaMap, SchemaObject, StringFormat, TypeSet,
};
pub use output::{OutputFormat, RenderOptions, render, write_document};

/// Builder entry points, meant to be used as `s::object(...)`.
pub mod s {
    pub use crate::compose::{
        all_of, always_invalid, always_valid, any_of, constant, enumerator, if_then,
        if_then_else, not, one_of,
    };
    pub use crate::kinds::{
        ArrayOptions, Contains, ItemsRule, NumericOptions, ObjectOptions, StringOptions, array,
        array_with, boolean, boolean_with, integer, integer_with, null, null_with, number,
        number_with, object, object_with, string, string_with,
    };
    pub use crate::properties::{
        PropertyOptions, RequiredPropertyOptions, def, nullable, pattern_property, properties,
        property, property_with, reference, required_property, required_property_with,
    };
}
