//! The graft document model.
//!
//! A document is an ordered sequence of [`Block`] nodes under a [`Document`]
//! root, with formatted text represented as [`Inline`] content. The model is
//! deliberately flat: headings do not own the content that follows them, they
//! only carry a level. This keeps splicing (the transclusion resolver's core
//! move) a plain `Vec` operation.
//!
//! All node types serialize with serde, which is what the `json` format
//! uses directly.

pub mod nodes;

pub use nodes::{
    inlines_to_text, Attr, Block, CodeBlock, Document, Heading, Image, Inline, Link, List,
    Metadata, Paragraph, RawBlock,
};

/// Maximum heading level representable in any supported output format.
pub const MAX_HEADING_LEVEL: i64 = 6;
