//! Rendering options and configuration.

/// Options for rendering document content.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Run the typography fix pipeline over the rendered text
    pub apply_fixes: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the typography fix pipeline.
    pub fn with_fixes(mut self, apply: bool) -> Self {
        self.apply_fixes = apply;
        self
    }
}
