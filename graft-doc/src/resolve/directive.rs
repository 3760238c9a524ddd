//! Include directive recognition.
//!
//! A directive is a code block carrying the `include` class. Its body lists
//! one relative file path per line; `//` lines are comments. The optional
//! `format` and `shift-heading-level-by` attributes tune how the listed
//! files are parsed and merged.

use crate::ast::CodeBlock;
use crate::resolve::diagnostics::{Diagnostics, Warning};

/// Class marking a code block as an include directive.
pub const INCLUDE_CLASS: &str = "include";

/// Attribute naming the source format of the included files.
pub const FORMAT_ATTR: &str = "format";

/// Attribute carrying an explicit heading shift.
pub const SHIFT_ATTR: &str = "shift-heading-level-by";

/// A parsed include directive.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeDirective {
    /// Source format of the listed files; resolver default applies when absent.
    pub format: Option<String>,
    /// Explicit heading shift; auto-inference or 0 applies when absent.
    pub shift: Option<i64>,
    /// Relative file paths, in directive order, comments and blanks removed.
    pub paths: Vec<String>,
}

impl IncludeDirective {
    /// Recognize a code block as an include directive.
    ///
    /// Returns `None` for ordinary code blocks. A malformed shift value is
    /// warned about and treated as an explicit 0 (no shift, no inference),
    /// not as a reason to reject the directive.
    pub fn from_block(block: &CodeBlock, diagnostics: &mut Diagnostics) -> Option<Self> {
        if !block.attr.has_class(INCLUDE_CLASS) {
            return None;
        }

        let shift = match block.attr.get(SHIFT_ATTR) {
            None => None,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    diagnostics.push(Warning::invalid_attribute(SHIFT_ATTR, raw));
                    Some(0)
                }
            },
        };

        let paths = block
            .text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("//"))
            .map(str::to_string)
            .collect();

        Some(IncludeDirective {
            format: block.attr.get(FORMAT_ATTR).map(str::to_string),
            shift,
            paths,
        })
    }
}
