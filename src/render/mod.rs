//! Rendering module for converting documents to output formats.

mod appendix;
mod json;
mod options;
mod text;

pub use appendix::{append_references, definitions_section, regulations_section};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use text::to_text;
