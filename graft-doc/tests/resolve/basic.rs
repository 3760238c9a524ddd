//! Directive expansion basics: ordering, comments, failure recovery.

use super::{assert_no_residual_directives, resolve_md, write_file};
use graft_doc::ast::{inlines_to_text, Block};
use graft_doc::{ResolveOptions, WarningKind};

fn paragraph_texts(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::Paragraph(p) => Some(inlines_to_text(&p.content)),
            _ => None,
        })
        .collect()
}

#[test]
fn single_include_replaced_by_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "chapter.md", "Chapter text.\n");

    let host = "Before.\n\n``` {.include}\nchapter.md\n```\n\nAfter.\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_no_residual_directives(&doc);
    assert_eq!(
        paragraph_texts(&doc.blocks),
        vec!["Before.", "Chapter text.", "After."]
    );
}

#[test]
fn headings_pass_through_unshifted_by_default() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "sec.md", "## Section\n\nBody.\n");

    let host = "``` {.include}\nsec.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(super::heading_levels(&doc), vec![2]);
}

#[test]
fn comments_and_blank_lines_skip_but_order_holds() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.md", "From a.\n");
    write_file(dir.path(), "b.md", "From b.\n");

    let host = "``` {.include}\na.md\n// comment\n\nb.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(paragraph_texts(&doc.blocks), vec!["From a.", "From b."]);
}

#[test]
fn missing_file_skips_line_but_keeps_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "real.md", "Real content.\n");

    let host = "``` {.include}\nmissing.md\nreal.md\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::FileNotFound);
    assert_eq!(paragraph_texts(&doc.blocks), vec!["Real content."]);
    assert_no_residual_directives(&doc);
}

#[test]
fn resolving_a_resolved_tree_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "chapter.md", "# Chapter\n\nText.\n");

    let host = "``` {.include}\nchapter.md\n```\n";
    let (once, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());
    assert!(warnings.is_empty());

    let registry = graft_doc::FormatRegistry::with_defaults();
    let mut resolver = graft_doc::Resolver::new(&registry, ResolveOptions::default());
    let twice = resolver.resolve(once.clone(), dir.path());

    assert_eq!(once, twice);
    assert!(resolver.diagnostics().is_empty());
}

#[test]
fn directive_inside_a_block_quote_resolves() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "note.md", "Quoted note.\n");

    let host = "> intro\n>\n> ``` {.include}\n> note.md\n> ```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_no_residual_directives(&doc);
    match &doc.blocks[0] {
        Block::BlockQuote(children) => {
            assert_eq!(paragraph_texts(children), vec!["intro", "Quoted note."]);
        }
        other => panic!("Expected block quote, got {other:?}"),
    }
}

#[test]
fn included_json_tree_splices_in() {
    let dir = tempfile::tempdir().unwrap();
    let tree = r#"{
        "meta": { "title": null, "extra": {} },
        "blocks": [
            { "Paragraph": { "content": [ { "Text": "From JSON." } ] } }
        ]
    }"#;
    write_file(dir.path(), "tree.json", tree);

    let host = "``` {.include format=json}\ntree.json\n```\n";
    let (doc, warnings) = resolve_md(dir.path(), host, ResolveOptions::default());

    assert!(warnings.is_empty());
    assert_eq!(paragraph_texts(&doc.blocks), vec!["From JSON."]);
}
