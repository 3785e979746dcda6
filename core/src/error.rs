//! Error type for converting JSON trees into schema documents.

use thiserror::Error;

/// Errors raised when a JSON value cannot be read as a schema.
///
/// Building schemas never fails; only conversion from untyped JSON does.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The value is neither a boolean literal nor an object.
    #[error("expected a boolean or object schema, found {0}")]
    NotAFragment(&'static str),

    /// A keyword holds a value of the wrong shape.
    #[error("malformed schema object: {0}")]
    Malformed(#[from] serde_json::Error),
}
