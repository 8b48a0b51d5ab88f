//! Draft extraction from editor HTML.

mod fallback;
mod html;
mod options;

pub use fallback::plain_text_blocks;
pub use html::DraftParser;
pub use options::ParseOptions;
