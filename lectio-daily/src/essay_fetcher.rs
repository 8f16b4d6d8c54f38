//! Remote essay text retrieval, shaping and caching
//!
//! Cache first, then the text service. Whatever the outcome (shaped text or
//! placeholder) is stored, so a failing document is not retried for the
//! lifetime of the cache. A per-key guard keeps concurrent misses for the
//! same document down to a single outbound request.

use crate::essay_cache::EssayCache;
use crate::types::{FetchError, TextSource};
use lectio_common::config::EssayPolicy;
use lectio_common::{EssayMetadata, Reading};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Single paragraph substituted when no usable text is available
pub const ESSAY_PLACEHOLDER: &str = "The full text of this essay could not be retrieved today. \
It can be read in full at the source cited below.";

/// Why an essay fell back to the placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The text service lookup failed
    Fetch(FetchError),
    /// Text was returned but nothing survived shaping
    NoUsableText,
}

/// Where a resolved essay came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EssayOrigin {
    Cached,
    Fetched,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayResolution {
    pub reading: Reading,
    pub origin: EssayOrigin,
}

pub struct EssayFetcher {
    source: Arc<dyn TextSource>,
    cache: Arc<dyn EssayCache>,
    policy: EssayPolicy,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl EssayFetcher {
    pub fn new(source: Arc<dyn TextSource>, cache: Arc<dyn EssayCache>, policy: EssayPolicy) -> Self {
        Self {
            source,
            cache,
            policy,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Full essay reading for a catalog entry. Never fails.
    pub async fn get_essay(&self, metadata: &EssayMetadata) -> Reading {
        self.resolve(metadata).await.reading
    }

    /// Like [`get_essay`](Self::get_essay) but reports where the reading came from
    pub async fn resolve(&self, metadata: &EssayMetadata) -> EssayResolution {
        let document_id = metadata.external_document_id.as_str();

        if let Some(reading) = self.cache.get(document_id).await {
            debug!(document_id = %document_id, "Essay cache hit");
            return EssayResolution {
                reading,
                origin: EssayOrigin::Cached,
            };
        }

        let guard = self.key_guard(document_id).await;
        let resolution = {
            let _held = guard.lock().await;

            // Another caller may have filled the entry while we waited
            match self.cache.get(document_id).await {
                Some(reading) => {
                    debug!(document_id = %document_id, "Essay cache filled while waiting");
                    EssayResolution {
                        reading,
                        origin: EssayOrigin::Cached,
                    }
                }
                None => {
                    let (reading, origin) = self.fetch_and_shape(metadata).await;
                    let reading = self.cache.insert_if_absent(document_id, reading).await;
                    EssayResolution { reading, origin }
                }
            }
        };

        self.in_flight.lock().await.remove(document_id);
        resolution
    }

    async fn key_guard(&self, document_id: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(
            in_flight
                .entry(document_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    async fn fetch_and_shape(&self, metadata: &EssayMetadata) -> (Reading, EssayOrigin) {
        let document_id = metadata.external_document_id.as_str();

        let paragraphs = match self.source.document_text(document_id).await {
            Ok(raw) => shape_paragraphs(&raw, &self.policy),
            Err(e) => {
                warn!(
                    document_id = %document_id,
                    source = self.source.name(),
                    error = %e,
                    "Essay text fetch failed, using placeholder"
                );
                return (placeholder(metadata), EssayOrigin::Fallback(FallbackReason::Fetch(e)));
            }
        };

        if paragraphs.is_empty() {
            warn!(document_id = %document_id, "Essay text had no usable paragraphs, using placeholder");
            return (
                placeholder(metadata),
                EssayOrigin::Fallback(FallbackReason::NoUsableText),
            );
        }

        info!(
            document_id = %document_id,
            paragraphs = paragraphs.len(),
            "Essay text fetched"
        );
        (Reading::essay(metadata, paragraphs), EssayOrigin::Fetched)
    }
}

fn placeholder(metadata: &EssayMetadata) -> Reading {
    Reading::essay(metadata, vec![ESSAY_PLACEHOLDER.to_string()])
}

/// Turn raw document text into a bounded list of display paragraphs.
///
/// Paragraphs are separated by blank lines. Section heading lines (lines
/// starting with the section marker) are dropped; the body lines that follow
/// a heading in the same block are kept. Accumulation stops once the
/// running word count exceeds the budget with at least `min_paragraphs` kept,
/// or once `max_paragraphs` are kept.
pub fn shape_paragraphs(raw: &str, policy: &EssayPolicy) -> Vec<String> {
    let mut kept = Vec::new();
    let mut words = 0usize;

    for paragraph in split_paragraphs(raw, &policy.section_marker) {
        if kept.len() >= policy.max_paragraphs {
            break;
        }

        words += paragraph.split_whitespace().count();
        kept.push(paragraph);

        if words > policy.word_budget && kept.len() >= policy.min_paragraphs {
            break;
        }
    }

    kept
}

fn split_paragraphs(raw: &str, section_marker: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut current, &mut paragraphs);
        } else if !trimmed.starts_with(section_marker) {
            current.push(line);
        }
    }
    flush(&mut current, &mut paragraphs);

    paragraphs
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let paragraph = current.join("\n").trim().to_string();
    if !paragraph.is_empty() {
        paragraphs.push(paragraph);
    }
    current.clear();
}

// ============================================================================
// Mock Source for Testing
// ============================================================================
