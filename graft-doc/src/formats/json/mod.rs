//! JSON format implementation
//!
//! Serializes the graft document tree directly through serde. The output is
//! lossless (formatted titles included), which makes it the interop and
//! debugging format: pipe it into `jq`, diff resolved trees, or feed it back
//! in for a second pass.

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for the serde-backed JSON tree
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Lossless document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}
