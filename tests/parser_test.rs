//! Integration tests for draft extraction.

use undraft::parser::plain_text_blocks;
use undraft::{parse_html, Alignment, Block, DraftParser, InlineContent, ParseOptions};

#[test]
fn test_block_order_matches_reading_order() {
    let doc = parse_html("<h1>A</h1><p>b</p><h2>C</h2>");

    assert_eq!(doc.block_count(), 3);
    assert!(matches!(&doc.blocks[0], Block::Heading { level: 1, text, .. } if text == "A"));
    match &doc.blocks[1] {
        Block::Paragraph(p) => assert_eq!(p.plain_text(), "b"),
        other => panic!("expected paragraph, got {:?}", other),
    }
    assert!(matches!(&doc.blocks[2], Block::Heading { level: 2, text, .. } if text == "C"));
}

#[test]
fn test_heading_never_recurses() {
    let doc = parse_html("<h1><strong>BAB</strong> <em>I</em></h1>");

    assert_eq!(doc.block_count(), 1);
    // One flattened heading, no run-level formatting retained
    assert!(matches!(&doc.blocks[0], Block::Heading { level: 1, text, .. } if text == "BAB I"));
}

#[test]
fn test_empty_paragraph_contributes_nothing() {
    let doc = parse_html("<p>a</p><p></p><p>b</p>");
    assert_eq!(doc.block_count(), 2);
}

#[test]
fn test_quill_draft_round_trip() {
    let html = "<div class=\"ql-editor\">\
        <h1 class=\"ql-align-center\">RANCANGAN PERATURAN</h1>\
        <p class=\"ql-indent-1\">Menimbang: <strong>bahwa</strong> perlu diatur;</p>\
        <p class=\"ql-align-justify\">Pasal 1<br>Ketentuan umum.</p>\
        <br>\
        </div>";
    let doc = parse_html(html);

    assert_eq!(doc.block_count(), 4);

    assert!(matches!(
        &doc.blocks[0],
        Block::Heading {
            level: 1,
            alignment: Alignment::Center,
            ..
        }
    ));

    let Block::Paragraph(menimbang) = &doc.blocks[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(menimbang.plain_text(), "    Menimbang: bahwa perlu diatur;");
    let has_bold = menimbang.runs.iter().any(|run| match run {
        InlineContent::Text(r) => r.style.bold && r.text == "bahwa",
        InlineContent::LineBreak => false,
    });
    assert!(has_bold);

    let Block::Paragraph(pasal) = &doc.blocks[2] else {
        panic!("expected paragraph");
    };
    assert_eq!(pasal.alignment, Alignment::Justify);
    assert_eq!(pasal.plain_text(), "Pasal 1\nKetentuan umum.");

    assert!(matches!(doc.blocks[3], Block::LineBreak));
}

#[test]
fn test_fallback_round_trip() {
    let blocks = plain_text_blocks("<p>Hello<br>World</p>");

    assert_eq!(blocks.len(), 2);
    for (block, expected) in blocks.iter().zip(["Hello", "World"]) {
        match block {
            Block::Paragraph(p) => {
                assert_eq!(p.plain_text(), expected);
                assert_eq!(p.alignment, Alignment::Left);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }
}

#[test]
fn test_fallback_is_idempotent() {
    let malformed = "<p>a<b<br>>c</p><div";
    assert_eq!(plain_text_blocks(malformed), plain_text_blocks(malformed));
}

#[test]
fn test_parse_never_fails_on_bad_options() {
    let parser = DraftParser::with_options(
        ParseOptions::new().with_editor_selector("((("),
    );
    // Fallback output, not a panic or error
    let doc = parser.parse("<p>Hello<br>World</p>");
    assert_eq!(doc.plain_text(), "Hello\n\nWorld");
}

#[test]
fn test_whitespace_paragraph_survives() {
    // Spacing paragraphs carry a whitespace run and must not vanish
    let doc = parse_html("<p>before</p><p>   </p><p>after</p>");
    assert_eq!(doc.block_count(), 3);
    match &doc.blocks[1] {
        Block::Paragraph(p) => assert_eq!(p.plain_text(), "   "),
        other => panic!("expected paragraph, got {:?}", other),
    }
}

#[test]
fn test_whitespace_only_document_is_empty() {
    assert!(parse_html("   \n ").is_empty());
    assert!(parse_html("").is_empty());
}
