//! Heading shifts: explicit attributes, inference, title capture.

use graft_doc::ast::{Block, Heading, Inline};
use graft_doc::resolve::shift::shift_headings;
use graft_doc::ResolveOptions;
use proptest::prelude::*;

use super::{heading_levels, resolve_md, write_file};

#[test]
fn explicit_shift_moves_headings_down() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sec.md", "# Section\n\n## Detail\n");

    let host = "``` {.include shift-heading-level-by=2}\nsec.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(heading_levels(&doc), vec![3, 4]);
}

#[test]
fn explicit_shift_clamps_at_the_heading_ceiling() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "deep.md", "##### Almost\n\n###### Bottom\n");

    let host = "``` {.include shift-heading-level-by=3}\ndeep.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(heading_levels(&doc), vec![6, 6]);
}

#[test]
fn huge_shift_attribute_clamps_instead_of_wrapping() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sec.md", "# Section\n\nBody.\n");

    let host = "``` {.include shift-heading-level-by=9223372036854775807}\nsec.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(heading_levels(&doc), vec![6]);
}

#[test]
fn auto_shift_compounds_across_nesting() {
    let dir = tempfile::tempdir().unwrap();
    // a.md is included under the host's level-2 heading; b.md is included
    // under a.md's own level-1 heading. The shifts stack: A lands at 1+2=3
    // and B at (1+1)+2=4.
    write_file(
        dir.path(),
        "a.md",
        "# A\n\n``` {.include}\nb.md\n```\n",
    );
    write_file(dir.path(), "b.md", "# B\n");

    let options = ResolveOptions {
        auto_shift: true,
        ..ResolveOptions::default()
    };
    let host = "## Host\n\n``` {.include}\na.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, options);

    assert!(warnings.is_empty());
    assert_eq!(heading_levels(&doc), vec![2, 3, 4]);
}

#[test]
fn auto_shift_before_any_heading_is_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sec.md", "# Section\n");

    let options = ResolveOptions {
        auto_shift: true,
        ..ResolveOptions::default()
    };
    let host = "``` {.include}\nsec.md\n```\n\n# Later\n";
    let (doc, warnings) = resolve_md(dir.path(), host, options);

    assert!(warnings.is_empty());
    assert_eq!(heading_levels(&doc), vec![1, 1]);
}

#[test]
fn negative_shift_captures_the_title() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "doc.md", "# Captured Title\n\n## Section\n");

    let host = "``` {.include shift-heading-level-by=-1}\ndoc.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(
        doc.meta.title,
        Some(vec![Inline::Text("Captured Title".to_string())])
    );
    assert_eq!(heading_levels(&doc), vec![1]);
}

#[test]
fn last_title_capture_wins_across_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "first.md", "# First Title\n");
    write_file(dir.path(), "second.md", "# Second Title\n");

    let host = "``` {.include shift-heading-level-by=-1}\nfirst.md\nsecond.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(
        doc.meta.title,
        Some(vec![Inline::Text("Second Title".to_string())])
    );
}

#[test]
fn malformed_shift_attribute_warns_and_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sec.md", "## Section\n");

    let host = "``` {.include shift-heading-level-by=two}\nsec.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, graft_doc::WarningKind::InvalidAttribute);
    // Content still spliced in, unshifted.
    assert_eq!(heading_levels(&doc), vec![2]);
}

fn heading_blocks(levels: &[i64]) -> Vec<Block> {
    levels
        .iter()
        .map(|&level| {
            Block::Heading(Heading {
                level,
                content: vec![Inline::Text(format!("H{level}"))],
            })
        })
        .collect()
}

fn shifted_levels(blocks: &[Block]) -> Vec<i64> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading(h) => Some(h.level),
            _ => None,
        })
        .collect()
}

proptest! {
    // Nested includes apply the child's shift before the parent's, so the
    // two must compose additively whenever neither step captures a title or
    // hits the level-6 ceiling.
    #[test]
    fn shifts_compose_additively_away_from_the_boundaries(
        levels in proptest::collection::vec(1i64..=3, 0..8),
        first in 0i64..=1,
        second in 0i64..=2,
    ) {
        let mut title_a = None;
        let once = shift_headings(heading_blocks(&levels), first + second, &mut title_a);

        let mut title_b = None;
        let step = shift_headings(heading_blocks(&levels), first, &mut title_b);
        let twice = shift_headings(step, second, &mut title_b);

        prop_assert_eq!(shifted_levels(&once), shifted_levels(&twice));
        prop_assert_eq!(title_a, None);
        prop_assert_eq!(title_b, None);
    }

    #[test]
    fn shift_never_produces_out_of_range_levels(
        levels in proptest::collection::vec(1i64..=6, 0..8),
        shift in -8i64..=8,
    ) {
        let mut title = None;
        let shifted = shift_headings(heading_blocks(&levels), shift, &mut title);

        for level in shifted_levels(&shifted) {
            prop_assert!((1..=6).contains(&level));
        }
    }
}
