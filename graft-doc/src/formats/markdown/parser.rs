//! Markdown parsing (Markdown → graft document tree)
//!
//! Pipeline: Markdown string → Comrak AST → graft Blocks

use crate::ast::{
    Attr, Block, CodeBlock, Document, Heading, Image, Inline, Link, List, Metadata, Paragraph,
    RawBlock,
};
use crate::error::FormatError;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

/// Parse a Markdown string into a graft document
pub fn parse_from_markdown(source: &str) -> Result<Document, FormatError> {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut meta = Metadata::default();
    let mut blocks = Vec::new();

    for child in root.children() {
        if let NodeValue::FrontMatter(content) = &child.data.borrow().value {
            parse_front_matter(content, &mut meta);
            continue;
        }
        collect_block(child, &mut blocks)?;
    }

    Ok(Document { meta, blocks })
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.autolink = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Shallow `key: value` front matter parsing, one pair per line.
///
/// The `title` key becomes the document title; everything else lands in
/// `Metadata::extra`, which is where the resolver reads its flags from.
fn parse_front_matter(content: &str, meta: &mut Metadata) {
    let body = content
        .trim()
        .trim_start_matches("---")
        .trim_end_matches("---")
        .trim();

    for line in body.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').trim_matches('\'').to_string();
            if key == "title" {
                meta.title = Some(vec![Inline::Text(value)]);
            } else {
                meta.extra.insert(key, value);
            }
        }
    }
}

/// Convert one Comrak block node into graft blocks
fn collect_block<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<Block>) -> Result<(), FormatError> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => {
            let mut content = Vec::new();
            for child in node.children() {
                collect_inline(child, &mut content)?;
            }
            blocks.push(Block::Heading(Heading {
                level: i64::from(heading.level),
                content,
            }));
        }

        NodeValue::Paragraph => {
            let mut content = Vec::new();
            for child in node.children() {
                collect_inline(child, &mut content)?;
            }
            blocks.push(Block::Paragraph(Paragraph { content }));
        }

        NodeValue::CodeBlock(code_block) => {
            blocks.push(Block::CodeBlock(CodeBlock {
                attr: parse_info_string(&code_block.info),
                text: code_block.literal.clone(),
            }));
        }

        NodeValue::BlockQuote => {
            let mut children = Vec::new();
            for child in node.children() {
                collect_block(child, &mut children)?;
            }
            blocks.push(Block::BlockQuote(children));
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let mut items = Vec::new();
            for item in node.children() {
                let mut item_blocks = Vec::new();
                for child in item.children() {
                    collect_block(child, &mut item_blocks)?;
                }
                items.push(item_blocks);
            }
            blocks.push(Block::List(List { ordered, items }));
        }

        NodeValue::HtmlBlock(html) => {
            blocks.push(Block::Raw(RawBlock {
                format: "html".to_string(),
                text: html.literal.clone(),
            }));
        }

        NodeValue::ThematicBreak => {
            blocks.push(Block::ThematicBreak);
        }

        NodeValue::FrontMatter(_) => {
            // Handled at the document level; nested occurrences are dropped
        }

        _ => {
            // Unknown block type, skip
        }
    }

    Ok(())
}

/// Convert one Comrak inline node into graft inline content
fn collect_inline<'a>(
    node: &'a AstNode<'a>,
    content: &mut Vec<Inline>,
) -> Result<(), FormatError> {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => {
            content.push(Inline::Text(text.clone()));
        }

        NodeValue::Emph => {
            let mut children = Vec::new();
            for child in node.children() {
                collect_inline(child, &mut children)?;
            }
            content.push(Inline::Emph(children));
        }

        NodeValue::Strong => {
            let mut children = Vec::new();
            for child in node.children() {
                collect_inline(child, &mut children)?;
            }
            content.push(Inline::Strong(children));
        }

        NodeValue::Code(code) => {
            content.push(Inline::Code(code.literal.clone()));
        }

        NodeValue::Link(link) => {
            let mut children = Vec::new();
            for child in node.children() {
                collect_inline(child, &mut children)?;
            }
            content.push(Inline::Link(Link {
                url: link.url.clone(),
                title: none_if_empty(&link.title),
                content: children,
            }));
        }

        NodeValue::Image(link) => {
            let mut alt = String::new();
            for child in node.children() {
                collect_text(child, &mut alt);
            }
            content.push(Inline::Image(Image {
                src: link.url.clone(),
                alt,
                title: none_if_empty(&link.title),
            }));
        }

        NodeValue::SoftBreak => {
            content.push(Inline::SoftBreak);
        }

        NodeValue::LineBreak => {
            content.push(Inline::LineBreak);
        }

        _ => {
            // Unknown inline type, skip
        }
    }

    Ok(())
}

/// Collect plain text from a node's subtree (for image alt text)
fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => output.push_str(text),
        NodeValue::Code(code) => output.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}

fn none_if_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Parse a fenced code block's info string into attributes.
///
/// Two shapes are accepted:
/// - pandoc-style braces: `{#id .include format=markdown caption="A b"}`
/// - a bare language word: `rust` (becomes a single class)
pub fn parse_info_string(info: &str) -> Attr {
    let info = info.trim();
    let mut attr = Attr::default();

    if info.is_empty() {
        return attr;
    }

    let Some(body) = info.strip_prefix('{').and_then(|i| i.strip_suffix('}')) else {
        // Bare language word; anything after the first whitespace is
        // CommonMark "extra info" that we do not model.
        if let Some(word) = info.split_whitespace().next() {
            attr.classes.push(word.to_string());
        }
        return attr;
    };

    for token in tokenize_attrs(body) {
        if let Some(id) = token.strip_prefix('#') {
            attr.identifier = id.to_string();
        } else if let Some(class) = token.strip_prefix('.') {
            attr.classes.push(class.to_string());
        } else if let Some((key, value)) = token.split_once('=') {
            let value = value.trim_matches('"').to_string();
            attr.pairs.push((key.to_string(), value));
        } else {
            attr.classes.push(token);
        }
    }

    attr
}

/// Split an attribute body on whitespace, keeping double-quoted values intact.
fn tokenize_attrs(body: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in body.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
