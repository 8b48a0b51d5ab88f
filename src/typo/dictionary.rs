//! Correction dictionary and backend record types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One correction record as served by the correction backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    /// Backend record id
    pub id: String,

    /// The incorrect form
    pub word: String,

    /// The suggested replacement
    pub suggestion: String,

    /// Where the entry came from, e.g. "admin"
    #[serde(default)]
    pub source: String,

    /// Display order
    #[serde(default)]
    pub order: u32,

    /// Free-form annotations
    #[serde(default)]
    pub meta: CorrectionMeta,

    /// Record creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Annotations attached to a correction record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionMeta {
    /// Reviewer note
    #[serde(default)]
    pub note: String,
}

/// Envelope for the backend's correction list payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CorrectionResponse {
    /// Response metadata
    #[serde(default)]
    pub meta: ResponseMeta,

    /// Correction records
    pub data: Vec<Correction>,
}

/// Metadata attached to a backend response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMeta {
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
}

/// A word -> suggestion mapping keyed by lower-cased incorrect form.
///
/// Built fresh from the backend's correction records; when duplicate
/// incorrect forms are supplied, the last one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from correction records.
    pub fn from_corrections(corrections: &[Correction]) -> Self {
        let mut dict = Self::new();
        for correction in corrections {
            dict.insert(&correction.word, &correction.suggestion);
        }
        dict
    }

    /// Insert an entry; the incorrect form is lower-cased and trimmed.
    /// Blank incorrect forms are ignored.
    pub fn insert(&mut self, word: &str, suggestion: &str) {
        let key = word.trim().to_lowercase();
        if key.is_empty() {
            return;
        }
        self.entries.insert(key, suggestion.to_string());
    }

    /// Remove an entry by incorrect form.
    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.entries.remove(&word.trim().to_lowercase())
    }

    /// Look up a suggestion for an already-normalized token.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether an incorrect form is known.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.trim().to_lowercase())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (incorrect form, suggestion) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (word, suggestion) in iter {
            dict.insert(&word.into(), &suggestion.into());
        }
        dict
    }
}
