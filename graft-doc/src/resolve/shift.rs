//! Heading-level adjustment for transcluded content.
//!
//! Shifting runs after nested includes are resolved, so a child's own shift
//! and its parent's compound naturally. A heading shifted to level 0 becomes
//! the document title (last capture wins) and leaves the tree; below 0 it is
//! deleted outright; above the format ceiling it is clamped.

use crate::ast::{Block, Inline, MAX_HEADING_LEVEL};

/// Apply a heading shift to a block sequence.
///
/// `title` receives the inline content of any heading whose shifted level is
/// exactly 0, overwriting an earlier capture.
pub fn shift_headings(
    blocks: Vec<Block>,
    shift: i64,
    title: &mut Option<Vec<Inline>>,
) -> Vec<Block> {
    if shift == 0 {
        return blocks;
    }

    let mut result = Vec::with_capacity(blocks.len());

    for block in blocks {
        match block {
            Block::Heading(mut heading) => {
                let level = heading.level.saturating_add(shift);
                if level == 0 {
                    *title = Some(heading.content);
                } else if level > 0 {
                    heading.level = level.min(MAX_HEADING_LEVEL);
                    result.push(Block::Heading(heading));
                }
                // level < 0: heading deleted
            }

            Block::BlockQuote(children) => {
                result.push(Block::BlockQuote(shift_headings(children, shift, title)));
            }

            Block::List(mut list) => {
                list.items = list
                    .items
                    .into_iter()
                    .map(|item| shift_headings(item, shift, title))
                    .collect();
                result.push(Block::List(list));
            }

            other => result.push(other),
        }
    }

    result
}
