//! Round-trip tests for the markdown format.
//!
//! Serialization is a normal form, not a byte-level echo of the input, so
//! these tests snapshot the serialized output and check the normal form is a
//! fixed point: parsing it again yields the same tree.

use graft_doc::ast::Document;
use graft_doc::format::Format;
use graft_doc::formats::markdown::MarkdownFormat;

fn roundtrip(source: &str) -> (Document, String) {
    let doc = MarkdownFormat.parse(source).expect("fixture to parse");
    let serialized = MarkdownFormat
        .serialize(&doc)
        .expect("fixture to serialize");
    (doc, serialized)
}

fn assert_fixed_point(doc: &Document, serialized: &str) {
    let reparsed = MarkdownFormat
        .parse(serialized)
        .expect("serialized output to parse");
    assert_eq!(&reparsed, doc);
}

#[test]
fn mixed_document_round_trips() {
    let source = "\
# Guide

Some *emphasis*, **strong**, and `code`.

- one
- two

> quoted text

```rust
fn main() {}
```
";
    let (doc, serialized) = roundtrip(source);

    insta::assert_snapshot!(serialized, @r###"
    # Guide

    Some *emphasis*, **strong**, and `code`.

    - one
    - two

    > quoted text

    ```rust
    fn main() {}
    ```
    "###);
    assert_fixed_point(&doc, &serialized);
}

#[test]
fn front_matter_round_trips() {
    let source = "---\ntitle: My Doc\ninclude-auto: true\n---\n\nBody.\n";
    let (doc, serialized) = roundtrip(source);

    insta::assert_snapshot!(serialized, @r###"
    ---
    title: My Doc
    include-auto: true
    ---

    Body.
    "###);
    assert_fixed_point(&doc, &serialized);
}

#[test]
fn include_directive_round_trips_unresolved() {
    let source = "```{.include format=markdown}\nchapter.md\nappendix.md\n```\n";
    let (doc, serialized) = roundtrip(source);

    assert_eq!(serialized, source);
    assert_fixed_point(&doc, &serialized);
}

#[test]
fn links_and_images_round_trip() {
    let source = "See [the docs](https://example.com \"Docs\") and ![chart](figures/chart.png).\n";
    let (doc, serialized) = roundtrip(source);

    assert_eq!(serialized, source);
    assert_fixed_point(&doc, &serialized);
}

#[test]
fn leading_thematic_break_round_trips() {
    // A document may open with a thematic break; its serialized form must
    // not be mistakable for a front matter delimiter on the way back in.
    let source = "***\n\nBody.\n\n***\n";
    let (doc, serialized) = roundtrip(source);

    assert_eq!(doc.blocks.len(), 3);
    assert_eq!(serialized, source);
    assert_fixed_point(&doc, &serialized);
}

#[test]
fn nested_quote_and_list_round_trip() {
    let source = "> - one\n> - two\n";
    let (doc, serialized) = roundtrip(source);

    insta::assert_snapshot!(serialized, @r###"
    > - one
    > - two
    "###);
    assert_fixed_point(&doc, &serialized);
}
