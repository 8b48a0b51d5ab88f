//! Degraded plain-text extraction.
//!
//! Used when the structured walk cannot run. Tags are stripped, `<br>`
//! collapses to a newline, and each remaining non-empty line becomes a
//! left-aligned paragraph.

use crate::model::{Block, Paragraph};
use regex::Regex;

/// Extract blocks from raw markup without building a node tree.
pub fn plain_text_blocks(html: &str) -> Vec<Block> {
    let br_re = Regex::new(r"(?i)<br\s*/?>").unwrap();
    let tag_re = Regex::new(r"<[^>]*>").unwrap();

    let text = br_re.replace_all(html, "\n");
    let text = tag_re.replace_all(&text, "");
    let text = text.replace('\t', "    ").replace("&nbsp;", " ");

    text.trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Block::Paragraph(Paragraph::with_text(line)))
        .collect()
}
