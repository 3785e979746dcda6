//! Document model and merge engine for JSON Schema draft 2020-12.
//!
//! This crate defines the in-memory shape of a schema document:
//!
//! - [`Schema`]: a boolean literal or a [`SchemaObject`].
//! - [`SchemaObject`]: one field per keyword, with [`Annotations`]
//!   flattened in.
//! - [`Kind`] / [`TypeSet`]: the `type` keyword.
//! - [`StringFormat`] / [`ContentEncoding`]: closed string vocabularies.
//!
//! Merging ([`Merge`], [`merge_value`]) combines fragments structurally and
//! is the only composition primitive the builder crate uses.
//!
//! Nothing here validates a schema against the meta-schema or validates
//! instances against a schema.
//!
//! # Example
//!
//! ```
//! use json_schema_builder_core::*;
//! use serde_json::json;
//!
//! let mut person = SchemaObject::of_kind(Kind::Object);
//! person.required = Some(vec!["name".into()]);
//!
//! let mut extra = SchemaObject::default();
//! extra.required = Some(vec!["email".into()]);
//!
//! person.merge(&extra);
//! assert_eq!(
//!     Schema::from(person).to_value(),
//!     json!({"type": "object", "required": ["name", "email"]})
//! );
//! ```

mod error;
mod merge;
mod types;

pub use error::DocumentError;
pub use merge::{Merge, merge_value, merged};
pub use types::*;
