//! Relative resource rewriting for transcluded content.
//!
//! When a file is spliced into its includer, resources it references by
//! relative path would otherwise resolve against the wrong directory. This
//! pass rebases relative image sources and code-include targets onto the
//! directory of the included file *as written in the directive*. Each
//! nesting level prepends only its own segment, so after the outermost pass
//! every path is relative to the top-level document's working directory.

use crate::ast::{Block, Inline};
use crate::common::paths;
use crate::resolve::code::CODE_INCLUDE_ATTR;
use std::path::Path;

/// Rebase relative resource paths in a block sequence onto `dir`.
pub fn rebase_resources(blocks: &mut [Block], dir: &Path) {
    if dir.as_os_str().is_empty() {
        return;
    }

    for block in blocks {
        match block {
            Block::Heading(heading) => rebase_inlines(&mut heading.content, dir),
            Block::Paragraph(paragraph) => rebase_inlines(&mut paragraph.content, dir),

            Block::CodeBlock(code_block) => {
                if let Some(target) = code_block.attr.get(CODE_INCLUDE_ATTR) {
                    let rebased = paths::rebase(dir, target);
                    code_block.attr.set(CODE_INCLUDE_ATTR, rebased);
                }
            }

            Block::BlockQuote(children) => rebase_resources(children, dir),

            Block::List(list) => {
                for item in &mut list.items {
                    rebase_resources(item, dir);
                }
            }

            Block::Raw(_) | Block::ThematicBreak => {}
        }
    }
}

fn rebase_inlines(content: &mut [Inline], dir: &Path) {
    for inline in content {
        match inline {
            Inline::Image(image) => {
                image.src = paths::rebase(dir, &image.src);
            }
            Inline::Emph(children) | Inline::Strong(children) => rebase_inlines(children, dir),
            Inline::Link(link) => rebase_inlines(&mut link.content, dir),
            _ => {}
        }
    }
}
