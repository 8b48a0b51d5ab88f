//! Dictionary-driven typo detection and correction.

mod dictionary;
mod fixes;
mod matcher;
mod replace;

pub use dictionary::{Correction, CorrectionMeta, CorrectionResponse, Dictionary, ResponseMeta};
pub use fixes::{apply_basic_fixes, FixPipeline};
pub use matcher::{find_typos, tokenize, TypoMatch};
pub use replace::{apply_suggestions, replace_word};
