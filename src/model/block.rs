//! Block-level content types.

use super::{Alignment, Paragraph};
use serde::{Deserialize, Serialize};

/// One structural unit of a parsed draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with flattened text
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Flattened heading text
        text: String,
        /// Heading alignment
        alignment: Alignment,
    },

    /// A paragraph of styled inline runs
    Paragraph(Paragraph),

    /// A standalone line break
    LineBreak,
}

impl Block {
    /// Create a heading block. The level is clamped to 1-6.
    pub fn heading(level: u8, text: impl Into<String>, alignment: Alignment) -> Self {
        Block::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
            alignment,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Get plain text content of the block, if any.
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Heading { text, .. } => Some(text.clone()),
            Block::Paragraph(p) => Some(p.plain_text()),
            Block::LineBreak => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_clamped() {
        let block = Block::heading(9, "BAB I", Alignment::Center);
        assert!(matches!(block, Block::Heading { level: 6, .. }));

        let block = Block::heading(0, "BAB I", Alignment::Left);
        assert!(matches!(block, Block::Heading { level: 1, .. }));
    }

    #[test]
    fn test_block_predicates() {
        let heading = Block::heading(1, "BAB I", Alignment::Left);
        assert!(heading.is_heading());
        assert!(!heading.is_paragraph());

        assert_eq!(Block::LineBreak.plain_text(), None);
    }
}
