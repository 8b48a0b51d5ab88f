//! Mechanical typography fixes for draft text.
//!
//! These are the always-safe normalizations a drafter can run before a
//! dictionary pass: punctuation spacing, whitespace collapse, curly
//! quotes, ellipsis, and dash spacing.

use regex::Regex;

/// Typography fix pipeline with precompiled patterns.
pub struct FixPipeline {
    ellipsis_re: Regex,
    punct_re: Regex,
    multi_space_re: Regex,
    quote_re: Regex,
    dash_re: Regex,
}

impl FixPipeline {
    /// Create a new pipeline.
    pub fn new() -> Self {
        Self {
            ellipsis_re: Regex::new(r"\.{3}").unwrap(),
            punct_re: Regex::new(r"\s*([,;:.!?])\s*").unwrap(),
            multi_space_re: Regex::new(r"\s{2,}").unwrap(),
            quote_re: Regex::new("\"([^\"]*)\"").unwrap(),
            dash_re: Regex::new(r"\s*-\s*").unwrap(),
        }
    }

    /// Apply all fixes to the input.
    pub fn process(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        // Ellipsis first, before punctuation spacing splits the dots apart
        let s = self.ellipsis_re.replace_all(input, "\u{2026}");
        let s = self.punct_re.replace_all(&s, "${1} ");
        let s = self.multi_space_re.replace_all(&s, " ");
        let s = self.quote_re.replace_all(&s, "\u{201C}${1}\u{201D}");
        let s = self.dash_re.replace_all(&s, " \u{2014} ");

        s.lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

impl Default for FixPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the default fix pipeline to the input.
pub fn apply_basic_fixes(input: &str) -> String {
    FixPipeline::new().process(input)
}
