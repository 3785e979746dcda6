//! Deep merging of schema fragments.
//!
//! Every composition path in the builder funnels through [`Merge`]. The rules
//! are the same at every level of the tree:
//!
//! - a keyword present on one side only is copied as-is;
//! - two lists are concatenated, left then right, duplicates kept;
//! - two maps are merged key by key, recursively;
//! - anything else is replaced by the incoming value.
//!
//! A boolean literal schema on either side is replaced wholesale by the
//! incoming schema; no keyword-level merge is attempted with it.
//!
//! # Example
//!
//! ```
//! use json_schema_builder_core::{Merge, Schema};
//! use serde_json::json;
//!
//! let mut base = Schema::from_value(json!({"required": ["a"], "title": "A"})).unwrap();
//! let incoming = Schema::from_value(json!({"required": ["b"], "title": "B"})).unwrap();
//!
//! base.merge(&incoming);
//! assert_eq!(base.to_value(), json!({"required": ["a", "b"], "title": "B"}));
//! ```

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::{Annotations, ContentEncoding, Schema, SchemaObject, StringFormat, TypeSet};

/// Structural merge of an incoming value into `self`.
///
/// Implementations never modify `incoming`.
pub trait Merge {
    fn merge(&mut self, incoming: &Self);
}

/// Returns a copy of `base` with `incoming` merged into it.
pub fn merged<T: Merge + Clone>(base: &T, incoming: &T) -> T {
    let mut out = base.clone();
    out.merge(incoming);
    out
}

/// Merges two untyped JSON values with the same rules as [`Merge`].
///
/// Used for the opaque keyword values (`default`, `const`, `examples`,
/// `enum`), which the model never interprets.
pub fn merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match base.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (Value::Array(base), Value::Array(incoming)) => base.extend(incoming.iter().cloned()),
        (base, incoming) => *base = incoming.clone(),
    }
}

macro_rules! replace_on_merge {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Merge for $ty {
                fn merge(&mut self, incoming: &Self) {
                    self.clone_from(incoming);
                }
            }
        )*
    };
}

replace_on_merge!(String, bool, u64, Number, StringFormat, ContentEncoding);

impl Merge for Value {
    fn merge(&mut self, incoming: &Self) {
        merge_value(self, incoming);
    }
}

impl<T: Merge + Clone> Merge for Option<T> {
    fn merge(&mut self, incoming: &Self) {
        match (self, incoming) {
            (Some(existing), Some(incoming)) => existing.merge(incoming),
            (slot @ None, Some(incoming)) => *slot = Some(incoming.clone()),
            (_, None) => {}
        }
    }
}

impl<T: Merge> Merge for Box<T> {
    fn merge(&mut self, incoming: &Self) {
        self.as_mut().merge(incoming.as_ref());
    }
}

impl<T: Clone> Merge for Vec<T> {
    fn merge(&mut self, incoming: &Self) {
        self.extend(incoming.iter().cloned());
    }
}

impl<T: Merge + Clone> Merge for IndexMap<String, T> {
    fn merge(&mut self, incoming: &Self) {
        for (key, value) in incoming {
            match self.get_mut(key) {
                Some(existing) => existing.merge(value),
                None => {
                    self.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

impl Merge for TypeSet {
    fn merge(&mut self, incoming: &Self) {
        if let (TypeSet::Many(kinds), TypeSet::Many(more)) = (&mut *self, incoming) {
            kinds.extend(more.iter().copied());
            return;
        }
        self.clone_from(incoming);
    }
}

impl Merge for Schema {
    fn merge(&mut self, incoming: &Self) {
        if let (Schema::Object(base), Schema::Object(incoming)) = (&mut *self, incoming) {
            base.merge(incoming);
            return;
        }
        self.clone_from(incoming);
    }
}

macro_rules! merge_fields {
    ($base:ident, $incoming:ident; $($field:ident),* $(,)?) => {
        $( $base.$field.merge(&$incoming.$field); )*
    };
}

impl Merge for Annotations {
    fn merge(&mut self, incoming: &Self) {
        merge_fields!(self, incoming;
            id, comment, default, title, description, examples,
            deprecated, read_only, write_only,
        );
    }
}

impl Merge for SchemaObject {
    fn merge(&mut self, incoming: &Self) {
        self.annotations.merge(&incoming.annotations);
        merge_fields!(self, incoming;
            schema, reference, anchor,
            kind, enum_values, const_value,
            all_of, any_of, one_of, not,
            if_schema, then_schema, else_schema,
            min_length, max_length, pattern, format, content_media_type, content_encoding,
            minimum, maximum, exclusive_minimum, exclusive_maximum, multiple_of,
            properties, required, pattern_properties, additional_properties,
            unevaluated_properties, property_names, min_properties, max_properties,
            dependent_required, dependent_schemas,
            prefix_items, items, unevaluated_items, min_items, max_items, unique_items,
            contains, min_contains, max_contains,
            defs, extra,
        );
    }
}
