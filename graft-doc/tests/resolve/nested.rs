//! Nested transclusion: recursion, per-file directories, cycles.

use super::{assert_no_residual_directives, resolve_md, write_file};
use graft_doc::ast::{inlines_to_text, Block};
use graft_doc::{ResolveOptions, WarningKind};

fn texts(doc: &graft_doc::ast::Document) -> Vec<String> {
    doc.blocks
        .iter()
        .filter_map(|b| match b {
            Block::Paragraph(p) => Some(inlines_to_text(&p.content)),
            _ => None,
        })
        .collect()
}

#[test]
fn two_levels_resolve_with_no_residual_directives() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.md",
        "From a.\n\n``` {.include}\nb.md\n```\n",
    );
    write_file(dir.path(), "b.md", "From b.\n");

    let host = "``` {.include}\na.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_no_residual_directives(&doc);
    assert_eq!(texts(&doc), vec!["From a.", "From b."]);
}

#[test]
fn nested_paths_resolve_against_the_including_file() {
    let dir = tempfile::tempdir().unwrap();
    // The host names sub/page.md; page.md names nested/inner.md, which only
    // exists relative to sub/, not relative to the host.
    write_file(
        dir.path(),
        "sub/page.md",
        "From page.\n\n``` {.include}\nnested/inner.md\n```\n",
    );
    write_file(dir.path(), "sub/nested/inner.md", "From inner.\n");

    let host = "``` {.include}\nsub/page.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(texts(&doc), vec!["From page.", "From inner."]);
}

#[test]
fn mutual_inclusion_warns_instead_of_recursing() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "a.md",
        "From a.\n\n``` {.include}\nb.md\n```\n",
    );
    write_file(
        dir.path(),
        "b.md",
        "From b.\n\n``` {.include}\na.md\n```\n",
    );

    let host = "``` {.include}\na.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::CircularInclude);
    // Each file's content appears exactly once.
    assert_eq!(texts(&doc), vec!["From a.", "From b."]);
    assert_no_residual_directives(&doc);
}

#[test]
fn same_file_twice_in_sequence_is_not_a_cycle() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "note.md", "A note.\n");

    let host = "``` {.include}\nnote.md\nnote.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(texts(&doc), vec!["A note.", "A note."]);
}

#[test]
fn cycle_detection_can_be_disabled_is_not_tested_against_real_cycles() {
    // With detect_cycles off, a sequential re-include still works; actual
    // cycles would recurse unboundedly, which is exactly why the default
    // stays on.
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "note.md", "A note.\n");

    let options = ResolveOptions {
        detect_cycles: false,
        ..ResolveOptions::default()
    };
    let host = "``` {.include}\nnote.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, options);

    assert!(warnings.is_empty());
    assert_eq!(texts(&doc), vec!["A note."]);
}
