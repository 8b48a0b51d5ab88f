//! Structured extraction from editor HTML.

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, Paragraph, TextRun, TextStyle};

use super::{fallback, ParseOptions};

/// Extracts a [`Document`] from serialized editor HTML.
///
/// The parser walks the editor root's children and emits one block per
/// structural element: headings are flattened to plain text, paragraphs
/// keep their styled inline runs, and wrapper elements with no semantic
/// meaning are dissolved into the surrounding sequence.
pub struct DraftParser {
    options: ParseOptions,
    text_align_re: Regex,
}

impl DraftParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            text_align_re: Regex::new(r"text-align\s*:\s*(left|center|right|justify)").unwrap(),
        }
    }

    /// Parse editor HTML into a document.
    ///
    /// This never fails: if the structured walk cannot run, the plain-text
    /// fallback produces one left-aligned paragraph per non-empty line.
    pub fn parse(&self, html: &str) -> Document {
        match self.parse_structured(html) {
            Ok(blocks) => Document::from_blocks(blocks),
            Err(e) => {
                log::warn!(
                    "structured extraction failed ({}), using plain-text fallback",
                    e
                );
                Document::from_blocks(fallback::plain_text_blocks(html))
            }
        }
    }

    /// Run the structured walk, surfacing failures to the caller.
    pub fn parse_structured(&self, html: &str) -> Result<Vec<Block>> {
        let dom = Html::parse_document(html);
        let root = self.editor_root(&dom)?;

        let mut blocks = Vec::new();
        for child in root.children() {
            if let Some(el) = ElementRef::wrap(child) {
                self.visit_element(el, &mut blocks);
            }
        }
        Ok(blocks)
    }

    /// Locate the editor content root, falling back to `body`.
    fn editor_root<'a>(&self, dom: &'a Html) -> Result<ElementRef<'a>> {
        let selector = Selector::parse(&self.options.editor_selector).map_err(|e| {
            Error::Selector(format!("{}: {}", self.options.editor_selector, e))
        })?;
        if let Some(root) = dom.select(&selector).next() {
            return Ok(root);
        }

        let body = Selector::parse("body").unwrap();
        match dom.select(&body).next() {
            Some(root) => Ok(root),
            None => Ok(dom.root_element()),
        }
    }

    fn visit_element(&self, el: ElementRef, blocks: &mut Vec<Block>) {
        let tag = el.value().name();

        if let Some(level) = heading_level(tag) {
            // Heading text is flattened; children are not visited.
            let text = el.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                log::debug!("heading level {}: {:?}", level, text);
                blocks.push(Block::heading(level, text, self.alignment_of(&el)));
            }
            return;
        }

        match tag {
            "p" | "div" => {
                let mut para = Paragraph::new(self.alignment_of(&el));
                if let Some(level) = indent_level(&el) {
                    para.add_text(" ".repeat(level as usize * self.options.indent_width));
                }
                self.collect_inline(&el, &mut para);
                if !para.is_empty() {
                    blocks.push(Block::Paragraph(para));
                }
            }
            "br" => blocks.push(Block::LineBreak),
            _ => {
                // Wrapper with no semantic meaning: treat its children as
                // siblings at the current level.
                for child in el.children() {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.visit_element(child_el, blocks);
                    }
                }
            }
        }
    }

    /// Scan a paragraph's direct children into inline runs.
    fn collect_inline(&self, el: &ElementRef, para: &mut Paragraph) {
        for child in el.children() {
            match child.value() {
                Node::Text(text) => {
                    let raw: &str = text;
                    if !raw.is_empty() {
                        para.add_text(raw.replace('\t', "    "));
                    }
                }
                Node::Element(_) => {
                    let Some(child_el) = ElementRef::wrap(child) else {
                        continue;
                    };
                    if child_el.value().name() == "br" {
                        para.add_line_break();
                        continue;
                    }
                    let style = inline_style(&child_el);
                    let text = child_el.text().collect::<String>();
                    if !text.trim().is_empty() {
                        para.add_run(TextRun::styled(text, style));
                    }
                }
                _ => {}
            }
        }
    }

    /// Derive alignment from class markers, then inline style declarations.
    fn alignment_of(&self, el: &ElementRef) -> Alignment {
        for class in el.value().classes() {
            match class.strip_prefix("ql-").unwrap_or(class) {
                "align-right" => return Alignment::Right,
                "align-center" => return Alignment::Center,
                "align-justify" => return Alignment::Justify,
                _ => {}
            }
        }

        if let Some(style_attr) = el.value().attr("style") {
            if let Some(caps) = self.text_align_re.captures(style_attr) {
                return match &caps[1] {
                    "right" => Alignment::Right,
                    "center" => Alignment::Center,
                    "justify" => Alignment::Justify,
                    _ => Alignment::Left,
                };
            }
        }

        Alignment::Left
    }
}

impl Default for DraftParser {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Indentation class level (`indent-1` through `indent-8`), if present.
fn indent_level(el: &ElementRef) -> Option<u8> {
    el.value().classes().find_map(|class| {
        let class = class.strip_prefix("ql-").unwrap_or(class);
        let level: u8 = class.strip_prefix("indent-")?.parse().ok()?;
        (1..=8).contains(&level).then_some(level)
    })
}

/// Style flags from the element's tag name or formatting classes.
fn inline_style(el: &ElementRef) -> TextStyle {
    let tag = el.value().name();
    let mut style = TextStyle {
        bold: matches!(tag, "strong" | "b"),
        italic: matches!(tag, "em" | "i"),
        underline: tag == "u",
    };
    for class in el.value().classes() {
        match class.strip_prefix("ql-").unwrap_or(class) {
            "bold" => style.bold = true,
            "italic" => style.italic = true,
            "underline" => style.underline = true,
            _ => {}
        }
    }
    style
}
