//! Error types for converting and rendering schema documents.
//!
//! Building never fails. Errors only come from reading untyped JSON into a
//! builder, from serialization, and from writing documents to disk.

use json_schema_builder_core::DocumentError;
use thiserror::Error;

/// Errors that can occur outside the infallible builder calls.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Untyped JSON could not be read as a schema.
    #[error("invalid schema fragment: {0}")]
    Document(#[from] DocumentError),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization or parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;
