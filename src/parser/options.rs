//! Parsing options and configuration.

/// Options for extracting draft content from editor HTML.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// CSS selector locating the editor content root
    pub editor_selector: String,

    /// Spaces emitted per indentation level
    pub indent_width: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the editor-root selector.
    pub fn with_editor_selector(mut self, selector: impl Into<String>) -> Self {
        self.editor_selector = selector.into();
        self
    }

    /// Set the number of spaces per indentation level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            editor_selector: ".ql-editor".to_string(),
            indent_width: 4,
        }
    }
}
