//! Token scanning against a correction dictionary.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::Dictionary;

/// Tokens of surrounding context included on each side of a match.
const CONTEXT_WINDOW: usize = 5;

/// One flagged occurrence of an incorrect word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypoMatch {
    /// The token as it appears in the text, case preserved
    pub original: String,

    /// The dictionary's suggested replacement
    pub suggestion: String,

    /// Index of the token in the word-boundary token sequence
    pub token_index: usize,

    /// Surrounding tokens, concatenated without added separators
    pub context: String,
}

/// Split text on Unicode word boundaries, keeping boundary tokens.
///
/// Concatenating the returned tokens reconstructs the input exactly.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds().collect()
}

/// Scan text for tokens present in the dictionary.
///
/// Matches are returned in ascending token order; repeated occurrences of
/// the same incorrect word each produce their own match. An empty
/// dictionary or empty text yields no matches.
pub fn find_typos(text: &str, dictionary: &Dictionary) -> Vec<TypoMatch> {
    if text.is_empty() || dictionary.is_empty() {
        return Vec::new();
    }

    let tokens = tokenize(text);
    let mut matches = Vec::new();

    for (idx, token) in tokens.iter().enumerate() {
        let key = token.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        if let Some(suggestion) = dictionary.get(&key) {
            let start = idx.saturating_sub(CONTEXT_WINDOW);
            let end = (idx + CONTEXT_WINDOW + 1).min(tokens.len());
            matches.push(TypoMatch {
                original: (*token).to_string(),
                suggestion: suggestion.to_string(),
                token_index: idx,
                context: tokens[start..end].concat(),
            });
        }
    }

    log::debug!("found {} typo matches in {} tokens", matches.len(), tokens.len());
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, &str)]) -> Dictionary {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_tokenize_round_trip() {
        let text = "Badan Pemerintahan, baru.";
        assert_eq!(tokenize(text).concat(), text);
    }

    #[test]
    fn test_single_match_preserves_case() {
        let dictionary = dict(&[("pemerintahan", "pemerintah")]);
        let matches = find_typos("Badan Pemerintahan baru", &dictionary);

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.original, "Pemerintahan");
        assert_eq!(m.suggestion, "pemerintah");
        assert_eq!(m.token_index, 2); // "Badan", " ", "Pemerintahan"
    }

    #[test]
    fn test_context_clamped_at_start() {
        let dictionary = dict(&[("resiko", "risiko")]);
        let matches = find_typos("Resiko itu nyata", &dictionary);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token_index, 0);
        assert_eq!(matches[0].context, "Resiko itu nyata");
    }

    #[test]
    fn test_context_clamped_at_end() {
        let dictionary = dict(&[("resiko", "risiko")]);
        let matches = find_typos("ada resiko", &dictionary);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].token_index, 2);
        assert_eq!(matches[0].context, "ada resiko");
    }

    #[test]
    fn test_repeated_occurrences() {
        let dictionary = dict(&[("resiko", "risiko")]);
        let matches = find_typos("resiko dan resiko", &dictionary);

        assert_eq!(matches.len(), 2);
        assert!(matches[0].token_index < matches[1].token_index);
    }

    #[test]
    fn test_no_substring_matches() {
        // "ban" must not match inside "bandara"
        let dictionary = dict(&[("ban", "bank")]);
        let matches = find_typos("bandara ban", &dictionary);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].original, "ban");
    }

    #[test]
    fn test_empty_inputs() {
        let dictionary = dict(&[("resiko", "risiko")]);
        assert!(find_typos("", &dictionary).is_empty());
        assert!(find_typos("teks apa pun", &Dictionary::new()).is_empty());
    }
}
