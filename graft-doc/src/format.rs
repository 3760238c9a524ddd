//! The `Format` trait: the seam between the document tree and concrete
//! syntaxes.
//!
//! The transclusion resolver calls `parse` through this trait to turn an
//! included file's bytes into a block sequence, and the CLI calls `serialize`
//! to write the merged tree back out. Registering an implementation in the
//! [`FormatRegistry`](crate::registry::FormatRegistry) is all it takes to
//! make a new syntax includable via a directive's `format` attribute.

use crate::ast::Document;
use crate::error::FormatError;

/// A document syntax the toolchain can read, write, or both.
pub trait Format: Send + Sync {
    /// Registry name of this format (`"markdown"`, `"json"`).
    fn name(&self) -> &str;

    /// One-line description shown by `graft --list-formats`.
    fn description(&self) -> &str {
        ""
    }

    /// File extensions (without the dot) used for detection and as
    /// directive-side aliases for [`name`](Format::name).
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether [`parse`](Format::parse) is implemented.
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether [`serialize`](Format::serialize) is implemented.
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Read source text into a document tree.
    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Write a document tree out as source text.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "format '{}' does not support serialization",
            self.name()
        )))
    }
}
