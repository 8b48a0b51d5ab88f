//! Reference records appended to exported documents.
//!
//! These mirror the records the reference backend serves: regulation
//! citations and term definitions a drafter selects for inclusion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A regulation citation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    /// Backend record id
    pub id: String,

    /// Regulation title, e.g. "UU" or "POJK"
    pub title: String,

    /// Year of enactment
    pub year: String,

    /// Regulation number
    pub number: String,

    /// Subject line ("tentang ...")
    pub text: String,

    /// Source URL
    pub url: String,

    /// Record creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Regulation {
    /// Format the citation line used in exported documents.
    pub fn citation(&self) -> String {
        let mut line = format!(
            "{} No. {} Tahun {} tentang {}",
            self.title, self.number, self.year, self.text
        );
        if !self.url.is_empty() {
            line.push_str(&format!(" ({})", self.url));
        }
        line
    }
}

/// A term definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// Backend record id
    pub id: String,

    /// Defined term
    pub term: String,

    /// Definition text
    pub meaning: String,

    /// Record creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// References selected for inclusion in an export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedReferences {
    /// Selected regulation citations
    pub regulations: Vec<Regulation>,

    /// Selected term definitions
    pub definitions: Vec<Definition>,
}

impl SelectedReferences {
    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty() && self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_citation() {
        let reg = Regulation {
            id: "r1".to_string(),
            title: "UU".to_string(),
            year: "1998".to_string(),
            number: "10".to_string(),
            text: "Perubahan atas Undang-Undang tentang Perbankan".to_string(),
            url: "https://peraturan.go.id/uu-10-1998".to_string(),
            created_at: None,
            updated_at: None,
        };

        assert_eq!(
            reg.citation(),
            "UU No. 10 Tahun 1998 tentang Perubahan atas Undang-Undang tentang Perbankan \
             (https://peraturan.go.id/uu-10-1998)"
        );
    }

    #[test]
    fn test_citation_without_url() {
        let reg = Regulation {
            id: "r2".to_string(),
            title: "POJK".to_string(),
            year: "2021".to_string(),
            number: "12".to_string(),
            text: "Bank Umum".to_string(),
            url: String::new(),
            created_at: None,
            updated_at: None,
        };

        assert_eq!(reg.citation(), "POJK No. 12 Tahun 2021 tentang Bank Umum");
    }

    #[test]
    fn test_selected_references_empty() {
        assert!(SelectedReferences::default().is_empty());
    }
}
