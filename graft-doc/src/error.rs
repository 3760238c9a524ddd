//! Errors surfaced by format and registry operations.
//!
//! These are the hard failures of the crate: a format the registry does not
//! know, or source text a format cannot handle. Problems inside the
//! transclusion resolver are deliberately softer and live in
//! `resolve::diagnostics` instead.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No registered format matched the requested name or extension
    FormatNotFound(String),
    /// The source text is not valid in the requested format
    ParseError(String),
    /// The document could not be written out in the requested format
    SerializationError(String),
    /// The format exists but lacks the requested direction
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "unknown format '{name}'"),
            FormatError::ParseError(msg) => write!(f, "parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
