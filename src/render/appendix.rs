//! Appended reference sections for exported documents.
//!
//! Exports carry the drafter's selected definitions under a `DEFINISI`
//! heading and regulation citations under `REFERENSI`, after the body.

use crate::model::{
    Alignment, Block, Definition, Document, Paragraph, Regulation, SelectedReferences, TextRun,
};

/// Build the definitions section: heading plus one paragraph per term.
pub fn definitions_section(definitions: &[Definition]) -> Vec<Block> {
    if definitions.is_empty() {
        return Vec::new();
    }

    let mut blocks = vec![Block::heading(2, "DEFINISI", Alignment::Center)];
    for def in definitions {
        let mut para = Paragraph::new(Alignment::Justify);
        para.add_run(TextRun::bold(&def.term));
        para.add_text(format!(" : {}", def.meaning));
        blocks.push(Block::Paragraph(para));
    }
    blocks
}

/// Build the citations section: heading plus numbered regulation entries.
pub fn regulations_section(regulations: &[Regulation]) -> Vec<Block> {
    if regulations.is_empty() {
        return Vec::new();
    }

    let mut blocks = vec![Block::heading(2, "REFERENSI", Alignment::Center)];
    for (idx, reg) in regulations.iter().enumerate() {
        let mut para = Paragraph::new(Alignment::Left);
        para.add_text(format!("{}. {}", idx + 1, reg.citation()));
        blocks.push(Block::Paragraph(para));
    }
    blocks
}

/// Append the selected references to a document.
///
/// Definitions come first, then regulation citations; empty selections
/// add nothing.
pub fn append_references(doc: &mut Document, selected: &SelectedReferences) {
    doc.blocks.extend(definitions_section(&selected.definitions));
    doc.blocks.extend(regulations_section(&selected.regulations));
}
