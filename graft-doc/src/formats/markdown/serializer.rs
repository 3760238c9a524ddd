//! Markdown serialization (graft document tree → Markdown)

use crate::ast::{inlines_to_text, Attr, Block, Document, Inline, List, Metadata};
use crate::error::FormatError;
use crate::resolve::directive::INCLUDE_CLASS;

/// Serialize a graft document to a Markdown string
pub fn serialize_to_markdown(doc: &Document) -> Result<String, FormatError> {
    let mut output = String::new();

    write_front_matter(&doc.meta, &mut output);

    let rendered: Vec<String> = doc.blocks.iter().map(render_block).collect();
    output.push_str(&rendered.join("\n\n"));

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// Emit `---` front matter when the document carries metadata.
///
/// The title is flattened to plain text here; formatted titles only survive
/// in formats whose metadata is structured (see the json format).
fn write_front_matter(meta: &Metadata, output: &mut String) {
    if meta.title.is_none() && meta.extra.is_empty() {
        return;
    }

    output.push_str("---\n");
    if let Some(title) = &meta.title {
        output.push_str(&format!("title: {}\n", inlines_to_text(title)));
    }
    for (key, value) in &meta.extra {
        output.push_str(&format!("{key}: {value}\n"));
    }
    output.push_str("---\n\n");
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Heading(heading) => {
            let level = heading.level.clamp(1, 6) as usize;
            format!("{} {}", "#".repeat(level), render_inlines(&heading.content))
        }

        Block::Paragraph(paragraph) => render_inlines(&paragraph.content),

        Block::CodeBlock(code_block) => {
            let fence = fence_for(&code_block.text);
            let info = render_info_string(&code_block.attr);
            let mut text = code_block.text.clone();
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            format!("{fence}{info}\n{text}{fence}")
        }

        Block::BlockQuote(children) => {
            let inner: Vec<String> = children.iter().map(render_block).collect();
            prefix_lines(&inner.join("\n\n"), "> ", "> ")
        }

        Block::List(list) => render_list(list),

        Block::Raw(raw) => raw.text.trim_end_matches('\n').to_string(),

        // Not `---`, which the parser would read as a front matter delimiter
        // when it opens the document.
        Block::ThematicBreak => "***".to_string(),
    }
}

fn render_list(list: &List) -> String {
    let mut lines = Vec::new();

    for (index, item) in list.items.iter().enumerate() {
        let marker = if list.ordered {
            format!("{}. ", index + 1)
        } else {
            "- ".to_string()
        };
        let indent = " ".repeat(marker.len());

        let inner: Vec<String> = item.iter().map(render_block).collect();
        lines.push(prefix_lines(&inner.join("\n\n"), &marker, &indent));
    }

    lines.join("\n")
}

/// Prefix the first line with `first` and every following line with `rest`.
/// Blank interior lines get the trimmed prefix (`>` rather than `> `).
fn prefix_lines(text: &str, first: &str, rest: &str) -> String {
    let mut result = String::new();

    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            result.push('\n');
        }
        let prefix = if index == 0 { first } else { rest };
        if line.is_empty() {
            result.push_str(prefix.trim_end());
        } else {
            result.push_str(prefix);
            result.push_str(line);
        }
    }

    result
}

/// A fence long enough not to collide with backtick runs in the body.
fn fence_for(text: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for ch in text.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Render code block attributes back into an info string.
///
/// A lone class stays a bare language word so ordinary code fences
/// round-trip untouched; anything richer uses the braced form. The
/// `include` class always stays braced: a bare `include` word would read
/// back as a language name, not a directive.
fn render_info_string(attr: &Attr) -> String {
    if attr.is_empty() {
        return String::new();
    }

    if attr.identifier.is_empty()
        && attr.pairs.is_empty()
        && attr.classes.len() == 1
        && attr.classes[0] != INCLUDE_CLASS
    {
        return attr.classes[0].clone();
    }

    let mut parts = Vec::new();
    if !attr.identifier.is_empty() {
        parts.push(format!("#{}", attr.identifier));
    }
    for class in &attr.classes {
        parts.push(format!(".{class}"));
    }
    for (key, value) in &attr.pairs {
        if value.chars().any(char::is_whitespace) || value.is_empty() {
            parts.push(format!("{key}=\"{value}\""));
        } else {
            parts.push(format!("{key}={value}"));
        }
    }

    format!("{{{}}}", parts.join(" "))
}

fn render_inlines(content: &[Inline]) -> String {
    let mut output = String::new();
    for inline in content {
        render_inline(inline, &mut output);
    }
    output
}

fn render_inline(inline: &Inline, output: &mut String) {
    match inline {
        Inline::Text(text) => output.push_str(text),

        Inline::Emph(children) => {
            output.push('*');
            output.push_str(&render_inlines(children));
            output.push('*');
        }

        Inline::Strong(children) => {
            output.push_str("**");
            output.push_str(&render_inlines(children));
            output.push_str("**");
        }

        Inline::Code(code) => {
            output.push('`');
            output.push_str(code);
            output.push('`');
        }

        Inline::Link(link) => {
            output.push('[');
            output.push_str(&render_inlines(&link.content));
            output.push_str("](");
            output.push_str(&link.url);
            if let Some(title) = &link.title {
                output.push_str(&format!(" \"{title}\""));
            }
            output.push(')');
        }

        Inline::Image(image) => {
            output.push_str("![");
            output.push_str(&image.alt);
            output.push_str("](");
            output.push_str(&image.src);
            if let Some(title) = &image.title {
                output.push_str(&format!(" \"{title}\""));
            }
            output.push(')');
        }

        Inline::SoftBreak => output.push('\n'),

        Inline::LineBreak => output.push_str("\\\n"),
    }
}
