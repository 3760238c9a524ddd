//! Code inclusion: filling code blocks from source files.
//!
//! A code block with an `include=<path>` attribute has its text replaced by
//! the named file's contents. Unlike document transclusion this keeps the
//! block itself; only the body and the consumed attributes change, so the
//! block's language class and identifier still drive highlighting and
//! cross-references downstream.
//!
//! Runs as its own pass over the fully transcluded tree: by then every
//! include path has been rebased to the top-level working directory (when
//! `update_paths` is on), matching where this pass reads from.

use crate::ast::{Block, CodeBlock};
use crate::common::paths;
use crate::resolve::diagnostics::{Diagnostics, Warning};
use std::fs;
use std::path::Path;

/// Attribute naming the file whose contents fill the code block.
pub const CODE_INCLUDE_ATTR: &str = "include";

/// Attribute selecting the first included line (1-based, inclusive).
pub const START_LINE_ATTR: &str = "start-line";

/// Attribute selecting the last included line (1-based, inclusive).
pub const END_LINE_ATTR: &str = "end-line";

/// Attribute stripping up to N leading spaces from every included line.
pub const DEDENT_ATTR: &str = "dedent";

/// Expand every code-include block in the tree, reading relative paths
/// against `base_dir`.
pub fn expand_code_includes(blocks: &mut [Block], base_dir: &Path, diagnostics: &mut Diagnostics) {
    for block in blocks {
        match block {
            Block::CodeBlock(code_block) => expand_block(code_block, base_dir, diagnostics),
            Block::BlockQuote(children) => expand_code_includes(children, base_dir, diagnostics),
            Block::List(list) => {
                for item in &mut list.items {
                    expand_code_includes(item, base_dir, diagnostics);
                }
            }
            _ => {}
        }
    }
}

fn expand_block(code_block: &mut CodeBlock, base_dir: &Path, diagnostics: &mut Diagnostics) {
    let Some(target) = code_block.attr.remove(CODE_INCLUDE_ATTR) else {
        return;
    };

    let start = line_attr(code_block, START_LINE_ATTR, diagnostics);
    let end = line_attr(code_block, END_LINE_ATTR, diagnostics);
    let dedent = line_attr(code_block, DEDENT_ATTR, diagnostics);

    let path = paths::normalize(&base_dir.join(&target));
    match fs::read_to_string(&path) {
        Ok(contents) => {
            code_block.text = select_lines(&contents, start, end, dedent);
        }
        Err(error) => {
            diagnostics.push(Warning::file_not_found(&path, &error));
            // Consumed attributes are gone either way so the failed include
            // does not leak into rendered output.
            code_block.text = String::new();
        }
    }
}

/// Read a numeric line attribute, consuming it from the block.
fn line_attr(code_block: &mut CodeBlock, name: &str, diagnostics: &mut Diagnostics) -> Option<usize> {
    let raw = code_block.attr.remove(name)?;
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            diagnostics.push(Warning::invalid_attribute(name, &raw));
            None
        }
    }
}

fn select_lines(
    contents: &str,
    start: Option<usize>,
    end: Option<usize>,
    dedent: Option<usize>,
) -> String {
    let start = start.unwrap_or(1).max(1);
    let mut text = String::new();

    for (index, line) in contents.lines().enumerate() {
        let number = index + 1;
        if number < start {
            continue;
        }
        if let Some(end) = end {
            if number > end {
                break;
            }
        }

        let line = match dedent {
            Some(width) => strip_leading_spaces(line, width),
            None => line,
        };
        text.push_str(line);
        text.push('\n');
    }

    text
}

fn strip_leading_spaces(line: &str, width: usize) -> &str {
    let mut stripped = line;
    for _ in 0..width {
        match stripped.strip_prefix(' ') {
            Some(rest) => stripped = rest,
            None => break,
        }
    }
    stripped
}
