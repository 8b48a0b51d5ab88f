//! Whole-word replacement of flagged tokens.

use regex::{NoExpand, Regex};
use unicode_segmentation::UnicodeSegmentation;

use super::TypoMatch;

/// Replace every whole-word occurrence of `original`, case-insensitively.
///
/// Single-token originals are replaced by re-tokenizing and rebuilding the
/// text, so no occurrence inside a longer word is touched and the search
/// term needs no escaping. Multi-token phrases use a boundary-anchored
/// regex with the phrase escaped.
pub fn replace_word(text: &str, original: &str, replacement: &str) -> String {
    let needle = original.trim();
    if needle.is_empty() {
        return text.to_string();
    }

    if needle.split_word_bounds().count() > 1 {
        return replace_phrase(text, needle, replacement);
    }

    let target = needle.to_lowercase();
    text.split_word_bounds()
        .map(|token| {
            if token.to_lowercase() == target {
                replacement
            } else {
                token
            }
        })
        .collect()
}

/// Apply every suggestion in order, each as a whole-word replacement.
pub fn apply_suggestions(text: &str, matches: &[TypoMatch]) -> String {
    matches.iter().fold(text.to_string(), |acc, m| {
        replace_word(&acc, &m.original, &m.suggestion)
    })
}

fn replace_phrase(text: &str, phrase: &str, replacement: &str) -> String {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, NoExpand(replacement)).into_owned(),
        Err(e) => {
            log::warn!("phrase replacement pattern failed ({}), text unchanged", e);
            text.to_string()
        }
    }
}
