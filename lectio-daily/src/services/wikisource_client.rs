//! MediaWiki plain-text extract client (Wikisource by default)
//!
//! Request: `action=query&prop=extracts&explaintext=1&titles={id}`
//!
//! Response envelope keys pages by page id. A missing page comes back under
//! the sentinel id `"-1"` with no `extract`.

use crate::types::{FetchError, TextSource};
use async_trait::async_trait;
use lectio_common::config::ServiceConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

const MISSING_PAGE_ID: &str = "-1";

/// MediaWiki extracts API client
pub struct WikisourceClient {
    http_client: reqwest::Client,
    api_url: String,
}

impl WikisourceClient {
    pub fn new(config: &ServiceConfig) -> lectio_common::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_url: config.text_api_url.clone(),
        })
    }
}

#[async_trait]
impl TextSource for WikisourceClient {
    fn name(&self) -> &'static str {
        "Wikisource"
    }

    async fn document_text(&self, document_id: &str) -> Result<String, FetchError> {
        debug!(document_id = %document_id, url = %self.api_url, "Querying text extract");

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", document_id),
            ])
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError(status.as_u16(), body));
        }

        let envelope: ExtractEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::ParseError(e.to_string()))?;

        extract_text(document_id, envelope)
    }
}

/// Parse an extracts response body into the document's plain text
pub fn parse_extract_response(document_id: &str, body: &str) -> Result<String, FetchError> {
    let envelope: ExtractEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::ParseError(e.to_string()))?;
    extract_text(document_id, envelope)
}

fn extract_text(document_id: &str, envelope: ExtractEnvelope) -> Result<String, FetchError> {
    let not_found = || FetchError::NotFound(document_id.to_string());

    let pages = envelope.query.ok_or_else(not_found)?.pages;

    pages
        .into_iter()
        .filter(|(page_id, _)| page_id != MISSING_PAGE_ID)
        .find_map(|(_, page)| page.extract.filter(|text| !text.trim().is_empty()))
        .ok_or_else(not_found)
}

// ============================================================================
// MediaWiki Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ExtractEnvelope {
    query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    #[serde(default)]
    pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    extract: Option<String>,
}
