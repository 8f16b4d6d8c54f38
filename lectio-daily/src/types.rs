//! Source traits for the two outbound services
//!
//! The fetchers depend on these traits rather than on concrete HTTP clients so
//! tests can substitute in-memory sources.

use lectio_common::PoemCandidate;
use thiserror::Error;

/// Failure of a single outbound lookup.
///
/// Never surfaced to callers of the assembler: fetchers turn it into a
/// degraded result and a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// External poetry corpus (PoetryDB in production)
#[async_trait::async_trait]
pub trait PoetrySource: Send + Sync {
    /// Source name for log fields
    fn name(&self) -> &'static str;

    /// All poems the service returns for one author, in service order
    async fn poems_by_author(&self, author: &str) -> Result<Vec<PoemCandidate>, FetchError>;
}

/// External plain-text document service (MediaWiki extracts in production)
#[async_trait::async_trait]
pub trait TextSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw plain-text body of the document
    async fn document_text(&self, document_id: &str) -> Result<String, FetchError>;
}
