//! Warning collection for best-effort resolution.
//!
//! The resolver never fails: a broken include degrades to a warning and the
//! rest of the document still assembles. The library stays shell-agnostic,
//! so warnings accumulate here and the caller decides where they go (the CLI
//! drains them to stderr).

use std::fmt;
use std::path::Path;

/// Classification of recoverable resolution problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// An include target could not be opened
    FileNotFound,
    /// An included file did not parse in its declared format
    ParseFailure,
    /// A directive attribute had an unusable value
    InvalidAttribute,
    /// A file included itself, directly or through intermediaries
    CircularInclude,
}

/// A single recoverable problem encountered during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn file_not_found(path: &Path, error: &std::io::Error) -> Self {
        Warning {
            kind: WarningKind::FileNotFound,
            message: format!("cannot open include file '{}': {error}", path.display()),
        }
    }

    pub fn parse_failure(path: &Path, error: impl fmt::Display) -> Self {
        Warning {
            kind: WarningKind::ParseFailure,
            message: format!("cannot parse include file '{}': {error}", path.display()),
        }
    }

    pub fn invalid_attribute(name: &str, value: &str) -> Self {
        Warning {
            kind: WarningKind::InvalidAttribute,
            message: format!("ignoring invalid value '{value}' for attribute '{name}'"),
        }
    }

    pub fn circular_include(path: &Path) -> Self {
        Warning {
            kind: WarningKind::CircularInclude,
            message: format!(
                "skipping circular include of '{}': file is already being resolved",
                path.display()
            ),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Sink for warnings emitted while resolving a document.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Consume the sink, returning the collected warnings in emission order.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
