//! Reading data model shared between the selection core and its callers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of a daily reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    Poem,
    Essay,
}

/// Catalog entry describing one essay.
///
/// `external_document_id` is the identity of the entry: it is both the key of
/// the essay cache and the title passed to the text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EssayMetadata {
    pub title: String,
    pub author: String,
    pub external_document_id: String,
    pub citation_text: String,
    pub citation_url: Option<String>,
}

impl EssayMetadata {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        external_document_id: impl Into<String>,
        citation_text: impl Into<String>,
        citation_url: Option<&str>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            external_document_id: external_document_id.into(),
            citation_text: citation_text.into(),
            citation_url: citation_url.map(str::to_string),
        }
    }
}

/// Poem returned by the poetry service, after parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoemCandidate {
    pub title: String,
    pub author: String,
    pub lines: Vec<String>,
    pub line_count: usize,
}

/// Normalized output record handed to the presentation layer.
///
/// `content` holds lines for poems and paragraphs for essays. It is never
/// empty: producers substitute a placeholder instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub kind: ReadingKind,
    pub title: String,
    pub author: String,
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_url: Option<String>,
}

impl Reading {
    /// Build an essay reading from catalog metadata and shaped paragraphs
    pub fn essay(metadata: &EssayMetadata, paragraphs: Vec<String>) -> Self {
        Self {
            kind: ReadingKind::Essay,
            title: metadata.title.clone(),
            author: metadata.author.clone(),
            content: paragraphs,
            citation_text: Some(metadata.citation_text.clone()),
            citation_url: metadata.citation_url.clone(),
        }
    }

    /// Number of lines (poem) or paragraphs (essay)
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// The poem and essay selected for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReadings {
    pub date: NaiveDate,
    pub poem: Reading,
    pub essay: Reading,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metadata() -> EssayMetadata {
        EssayMetadata::new(
            "Self-Reliance",
            "Ralph Waldo Emerson",
            "Essays: First Series/Self-Reliance",
            "Essays: First Series (1841)",
            Some("https://www.gutenberg.org/ebooks/16643"),
        )
    }

    #[test]
    fn test_essay_reading_copies_metadata() {
        let reading = Reading::essay(&sample_metadata(), vec!["Trust thyself.".to_string()]);

        assert_eq!(reading.kind, ReadingKind::Essay);
        assert_eq!(reading.title, "Self-Reliance");
        assert_eq!(reading.author, "Ralph Waldo Emerson");
        assert_eq!(reading.citation_text.as_deref(), Some("Essays: First Series (1841)"));
        assert_eq!(
            reading.citation_url.as_deref(),
            Some("https://www.gutenberg.org/ebooks/16643")
        );
        assert_eq!(reading.len(), 1);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ReadingKind::Poem).unwrap();
        assert_eq!(json, "\"poem\"");
    }

    #[test]
    fn test_reading_omits_missing_citation() {
        let reading = Reading {
            kind: ReadingKind::Poem,
            title: "Untitled".to_string(),
            author: "Anonymous".to_string(),
            content: vec!["A line".to_string()],
            citation_text: None,
            citation_url: None,
        };

        let value = serde_json::to_value(&reading).unwrap();
        assert!(value.get("citation_text").is_none());
        assert!(value.get("citation_url").is_none());
        assert_eq!(value["kind"], "poem");
    }
}
