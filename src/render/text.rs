//! Plain text rendering for draft documents.

use crate::error::Result;
use crate::model::Document;
use crate::typo::FixPipeline;

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = doc.plain_text();

    if options.apply_fixes {
        let pipeline = FixPipeline::new();
        output = pipeline.process(&output);
    }

    Ok(output.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Block, Paragraph};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_block(Block::heading(1, "BAB I", Alignment::Center));
        doc.add_block(Block::Paragraph(Paragraph::with_text("Pasal 1 berlaku.")));

        let options = RenderOptions::default();
        let result = to_text(&doc, &options).unwrap();

        assert_eq!(result, "BAB I\n\nPasal 1 berlaku.");
    }

    #[test]
    fn test_to_text_with_fixes() {
        let mut doc = Document::new();
        doc.add_block(Block::Paragraph(Paragraph::with_text("Pasal 1 ,berlaku")));

        let options = RenderOptions::new().with_fixes(true);
        let result = to_text(&doc, &options).unwrap();

        assert_eq!(result, "Pasal 1, berlaku");
    }
}
