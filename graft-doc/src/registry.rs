//! Format registry: the lookup table behind directive `format` attributes.
//!
//! The transclusion resolver and the CLI both borrow a registry to turn a
//! format name into a parser or serializer. Names are resolved leniently:
//! a registered file extension works wherever a format name does, so a
//! directive may say `format=md` as well as `format=markdown`.

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;
use std::collections::HashMap;

/// Registry of document formats, keyed by name.
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any existing format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Look up a format by name or registered file extension.
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        if let Some(format) = self.formats.get(name) {
            return Ok(format.as_ref());
        }
        self.formats
            .values()
            .find(|f| f.file_extensions().contains(&name))
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Whether `name` resolves to a registered format.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// All registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a format from a filename's extension.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|f| f.file_extensions().contains(&extension))
            .map(|f| f.name().to_string())
    }

    /// Parse source text in the named format.
    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "format '{format}' does not support parsing"
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a document in the named format.
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "format '{format}' does not support serialization"
            )));
        }
        fmt.serialize(doc)
    }

    /// A registry with the built-in formats registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::markdown::MarkdownFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
