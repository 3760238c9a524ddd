//! Markdown format implementation
//!
//! Bidirectional conversion between CommonMark Markdown and the graft
//! document tree.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. The serializer is written
//! by hand: comrak's AST is arena-allocated and awkward to build from
//! outside, while the graft tree maps onto Markdown text directly.
//!
//! # Extensions
//!
//! Only extensions the graft tree can represent are enabled: autolinks
//! (become `Inline::Link`) and `---` front matter (becomes shallow metadata).
//! Tables, strikethrough and task lists are left off so that their source
//! text survives round-trips as plain paragraphs instead of being dropped.
//!
//! # Attributes
//!
//! Fenced code blocks carry pandoc-style attributes in the info string,
//! `{#id .class key="value"}`, with a bare word (` ```rust `) read as a
//! single class. The `include` machinery rides on these attributes, so both
//! parser and serializer must round-trip them faithfully.

pub mod parser;
pub mod serializer;

use crate::ast::Document;
use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_markdown(source)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_markdown(doc)
    }
}
