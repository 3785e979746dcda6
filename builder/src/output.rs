//! Rendering finalized documents as JSON or YAML text.
//!
//! The builders only produce in-memory trees; this module is the thin layer
//! that hands them to `serde_json` or `serde_yaml`.
//!
//! # Example YAML options
//!
//! ```yaml
//! format: yaml
//! pretty: true
//! ```

use std::io::{BufWriter, Write};
use std::path::Path;

use json_schema_builder_core::Schema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::SchemaBuilder;
use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// How a document is rendered.
///
/// Deserializable so hosts can embed it in their own configuration.
///
/// # Examples
///
/// ```
/// use json_schema_builder::{OutputFormat, RenderOptions};
///
/// let options = RenderOptions::from_yaml_str("format: yaml").unwrap();
/// assert_eq!(options.format, OutputFormat::Yaml);
/// assert!(options.pretty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Indent JSON output. YAML output is always block-formatted.
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

impl RenderOptions {
    /// Compact single-line JSON.
    pub fn compact_json() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: false,
        }
    }

    /// Parses options from a YAML snippet; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Yaml`](crate::BuildError::Yaml) if parsing fails.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Renders `schema` as text.
///
/// # Errors
///
/// Returns [`Json`](crate::BuildError::Json) or
/// [`Yaml`](crate::BuildError::Yaml) if serialization fails.
pub fn render(schema: &Schema, options: &RenderOptions) -> Result<String> {
    debug!(format = ?options.format, pretty = options.pretty, "rendering schema document");
    let text = match (options.format, options.pretty) {
        (OutputFormat::Json, true) => serde_json::to_string_pretty(schema)?,
        (OutputFormat::Json, false) => serde_json::to_string(schema)?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(schema)?,
    };
    Ok(text)
}

/// Writes `schema` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`Io`](crate::BuildError::Io) if the file cannot be written, or a
/// serialization error from [`render`].
pub fn write_document(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &RenderOptions,
) -> Result<()> {
    let text = render(schema, options)?;
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

impl SchemaBuilder {
    /// Reads an untyped JSON fragment into a builder.
    ///
    /// # Errors
    ///
    /// Returns [`Document`](crate::BuildError::Document) if `value` is not a
    /// boolean or object, or holds a keyword of the wrong shape.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(Self::new(Schema::from_value(value)?))
    }

    /// Renders the finalized document.
    pub fn to_document_string(&self, options: &RenderOptions) -> Result<String> {
        render(&self.finalize(), options)
    }
}
