//! # undraft
//!
//! Structured content extraction and typo correction for rich-text
//! regulation drafts.
//!
//! This library takes the serialized HTML a rich-text editor produces and
//! extracts an ordered document model (headings, paragraphs with styled
//! inline runs, line breaks) ready for PDF layout, plus a dictionary-driven
//! typo-detection toolkit for reviewing legal drafts.
//!
//! ## Quick Start
//!
//! ```
//! use undraft::{parse_html, render};
//!
//! fn main() -> undraft::Result<()> {
//!     let doc = parse_html("<h1>BAB I</h1><p>Pasal 1 berlaku.</p>");
//!
//!     let options = render::RenderOptions::default();
//!     let text = render::to_text(&doc, &options)?;
//!     assert_eq!(text, "BAB I\n\nPasal 1 berlaku.");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Editor-HTML extraction**: Quill-style markup to typed content blocks
//! - **Graceful degradation**: malformed markup falls back to plain text
//! - **Typo detection**: word-boundary scanning against a correction
//!   dictionary, with whole-word replacement
//! - **Reference appendices**: selected definitions and regulation
//!   citations appended for export
//! - **Output formats**: plain text and JSON for a downstream PDF renderer

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod typo;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Definition, Document, InlineContent, Metadata, Paragraph, Regulation,
    SelectedReferences, TextRun, TextStyle,
};
pub use parser::{DraftParser, ParseOptions};
pub use render::{JsonFormat, RenderOptions};
pub use typo::{
    apply_basic_fixes, apply_suggestions, find_typos, replace_word, Correction, Dictionary,
    TypoMatch,
};

/// Parse editor HTML into a structured document.
///
/// Never fails: malformed markup degrades to the plain-text fallback.
///
/// # Example
///
/// ```
/// use undraft::parse_html;
///
/// let doc = parse_html("<p>Pasal 1.</p>");
/// assert_eq!(doc.block_count(), 1);
/// ```
pub fn parse_html(html: &str) -> Document {
    DraftParser::new().parse(html)
}

/// Parse editor HTML with custom options.
///
/// # Example
///
/// ```
/// use undraft::{parse_html_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_editor_selector("#draft");
/// let doc = parse_html_with_options("<div id=\"draft\"><p>Isi.</p></div>", options);
/// assert_eq!(doc.block_count(), 1);
/// ```
pub fn parse_html_with_options(html: &str, options: ParseOptions) -> Document {
    DraftParser::with_options(options).parse(html)
}

/// Extract plain text from editor HTML.
///
/// # Example
///
/// ```
/// use undraft::extract_text;
///
/// let text = extract_text("<h1>BAB I</h1><p>Pasal 1.</p>");
/// assert_eq!(text, "BAB I\n\nPasal 1.");
/// ```
pub fn extract_text(html: &str) -> String {
    parse_html(html).plain_text()
}

/// Builder for parsing and rendering draft documents.
///
/// # Example
///
/// ```
/// use undraft::Undraft;
///
/// let text = Undraft::new()
///     .with_editor_selector(".ql-editor")
///     .with_fixes(true)
///     .parse("<p>Pasal 1 ,berlaku.</p>")
///     .to_text()?;
/// assert_eq!(text, "Pasal 1, berlaku.");
/// # Ok::<(), undraft::Error>(())
/// ```
pub struct Undraft {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    references: Option<SelectedReferences>,
}

impl Undraft {
    /// Create a new Undraft builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            references: None,
        }
    }

    /// Set the editor-root selector.
    pub fn with_editor_selector(mut self, selector: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_editor_selector(selector);
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.parse_options = self.parse_options.with_indent_width(width);
        self
    }

    /// Enable the typography fix pipeline on text output.
    pub fn with_fixes(mut self, apply: bool) -> Self {
        self.render_options = self.render_options.with_fixes(apply);
        self
    }

    /// Append the selected references to the parsed document.
    pub fn with_references(mut self, references: SelectedReferences) -> Self {
        self.references = Some(references);
        self
    }

    /// Parse editor HTML and return a result wrapper.
    pub fn parse(self, html: &str) -> UndraftResult {
        let parser = DraftParser::with_options(self.parse_options);
        let mut document = parser.parse(html);
        if let Some(ref references) = self.references {
            render::append_references(&mut document, references);
        }
        UndraftResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Undraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a draft document.
pub struct UndraftResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UndraftResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text without fixes.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undraft_builder() {
        let undraft = Undraft::new().with_editor_selector("#draft").with_fixes(true);

        assert_eq!(undraft.parse_options.editor_selector, "#draft");
        assert!(undraft.render_options.apply_fixes);
    }

    #[test]
    fn test_parse_html_empty() {
        let doc = parse_html("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_extract_text() {
        let text = extract_text("<h1>BAB I</h1><p>Pasal 1.</p>");
        assert_eq!(text, "BAB I\n\nPasal 1.");
    }

    #[test]
    fn test_builder_with_references() {
        let selected = SelectedReferences {
            regulations: Vec::new(),
            definitions: vec![Definition {
                id: "d1".to_string(),
                term: "Bank".to_string(),
                meaning: "badan usaha".to_string(),
                created_at: None,
                updated_at: None,
            }],
        };

        let result = Undraft::new()
            .with_references(selected)
            .parse("<p>Isi.</p>");

        assert_eq!(result.document().block_count(), 3);
        let text = result.plain_text();
        assert!(text.contains("DEFINISI"));
        assert!(text.contains("Bank : badan usaha"));
    }

    #[test]
    fn test_builder_default() {
        let builder = Undraft::default();
        assert!(!builder.render_options.apply_fixes);
        assert_eq!(builder.parse_options.editor_selector, ".ql-editor");
    }
}
