//! Document model types for draft content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! editor-HTML extraction and content rendering. The model is
//! editor-agnostic and can represent content from any rich-text draft.

mod block;
mod document;
mod paragraph;
mod reference;

pub use block::Block;
pub use document::{Document, Metadata};
pub use paragraph::{Alignment, InlineContent, Paragraph, TextRun, TextStyle};
pub use reference::{Definition, Regulation, SelectedReferences};
