//! Core data structures for the document tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The root of a document: metadata plus an ordered block sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub meta: Metadata,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Build a document from blocks with empty metadata.
    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Document {
            meta: Metadata::default(),
            blocks,
        }
    }
}

/// Document-level metadata.
///
/// The title is formatted inline content, not plain text, so a captured
/// heading keeps its emphasis when it becomes the title. Everything else
/// lives in `extra` as plain strings (front matter is shallow key/value).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<Vec<Inline>>,
    pub extra: BTreeMap<String, String>,
}

impl Metadata {
    /// Interpret a metadata value as a boolean-ish flag.
    ///
    /// `true`, `yes`, `on` and `1` (case-insensitive) are truthy; a missing
    /// key or any other value is falsy.
    pub fn flag(&self, key: &str) -> bool {
        match self.extra.get(key) {
            Some(value) => {
                let value = value.trim().to_ascii_lowercase();
                matches!(value.as_str(), "true" | "yes" | "on" | "1")
            }
            None => false,
        }
    }
}

/// Attributes attached to a code block: `{#id .class key="value"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attr {
    pub identifier: String,
    pub classes: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

impl Attr {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up a key/value attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove a key/value attribute, returning its value if present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(index).1)
    }

    /// Replace the value of a key/value attribute in place.
    pub fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifier.is_empty() && self.classes.is_empty() && self.pairs.is_empty()
    }
}

/// A structural document unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
    BlockQuote(Vec<Block>),
    List(List),
    Raw(RawBlock),
    ThematicBreak,
}

/// A heading with a level. Level 1 is the top of the outline; supported
/// output formats cap at level 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: i64,
    pub content: Vec<Inline>,
}

/// A paragraph of inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: Vec<Inline>,
}

/// A fenced code block with its attributes and verbatim text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub attr: Attr,
    pub text: String,
}

/// An ordered or unordered list; each item is a block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<Vec<Block>>,
}

/// Raw, format-specific content passed through unparsed (e.g. HTML blocks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

/// A unit of formatted text inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Emph(Vec<Inline>),
    Strong(Vec<Inline>),
    Code(String),
    Link(Link),
    Image(Image),
    SoftBreak,
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub title: Option<String>,
    pub content: Vec<Inline>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
}

/// Flatten inline content to plain text, dropping formatting.
pub fn inlines_to_text(content: &[Inline]) -> String {
    let mut text = String::new();
    collect_text(content, &mut text);
    text
}

fn collect_text(content: &[Inline], output: &mut String) {
    for inline in content {
        match inline {
            Inline::Text(t) | Inline::Code(t) => output.push_str(t),
            Inline::Emph(children) | Inline::Strong(children) => collect_text(children, output),
            Inline::Link(link) => collect_text(&link.content, output),
            Inline::Image(image) => output.push_str(&image.alt),
            Inline::SoftBreak | Inline::LineBreak => output.push(' '),
        }
    }
}
