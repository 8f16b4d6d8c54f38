//! PoetryDB API client
//!
//! Endpoint: `{base}/author/{author}/title,author,lines,linecount`
//!
//! PoetryDB answers an unknown author with HTTP 200 and a JSON object
//! (`{"status":404,"reason":"Not found"}`) instead of an array, so the body
//! shape is checked before the status field can be trusted.

use crate::types::{FetchError, PoetrySource};
use async_trait::async_trait;
use lectio_common::config::ServiceConfig;
use lectio_common::PoemCandidate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const FIELDS: &str = "title,author,lines,linecount";

/// PoetryDB API client
pub struct PoetryDbClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PoetryDbClient {
    pub fn new(config: &ServiceConfig) -> lectio_common::Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.poetry_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn author_url(&self, author: &str) -> String {
        format!(
            "{}/author/{}/{}",
            self.base_url,
            urlencoding::encode(author),
            FIELDS
        )
    }
}

#[async_trait]
impl PoetrySource for PoetryDbClient {
    fn name(&self) -> &'static str {
        "PoetryDB"
    }

    async fn poems_by_author(&self, author: &str) -> Result<Vec<PoemCandidate>, FetchError> {
        let url = self.author_url(author);
        debug!(author = %author, url = %url, "Querying PoetryDB");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound(author.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::ApiError(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkError(e.to_string()))?;

        parse_author_response(author, &body)
    }
}

/// Parse a PoetryDB author lookup body into candidates, in service order
pub fn parse_author_response(author: &str, body: &str) -> Result<Vec<PoemCandidate>, FetchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| FetchError::ParseError(e.to_string()))?;

    match value {
        serde_json::Value::Array(_) => {
            let poems: Vec<PoetryDbPoem> = serde_json::from_value(value)
                .map_err(|e| FetchError::ParseError(e.to_string()))?;
            Ok(poems.into_iter().map(PoetryDbPoem::into_candidate).collect())
        }
        serde_json::Value::Object(ref map) if map.get("status").is_some() => {
            Err(FetchError::NotFound(author.to_string()))
        }
        _ => Err(FetchError::ParseError(format!(
            "expected a JSON array of poems for '{}'",
            author
        ))),
    }
}

// ============================================================================
// PoetryDB Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct PoetryDbPoem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    lines: Vec<String>,
    #[serde(default)]
    linecount: Option<LineCount>,
}

/// `linecount` is a string in PoetryDB responses but may also be numeric
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LineCount {
    Number(u64),
    Text(String),
}

impl PoetryDbPoem {
    fn into_candidate(self) -> PoemCandidate {
        let line_count = match &self.linecount {
            Some(LineCount::Number(n)) => usize::try_from(*n).ok(),
            Some(LineCount::Text(s)) => s.trim().parse::<usize>().ok(),
            None => None,
        }
        .unwrap_or(self.lines.len());

        PoemCandidate {
            title: self.title,
            author: self.author,
            lines: self.lines,
            line_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PoetryDbClient::new(&ServiceConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_author_url_escapes_name() {
        let client = PoetryDbClient::new(&ServiceConfig::default()).unwrap();
        assert_eq!(
            client.author_url("W.B. Yeats"),
            "https://poetrydb.org/author/W.B.%20Yeats/title,author,lines,linecount"
        );
    }

    #[test]
    fn test_parse_string_linecount() {
        let body = r#"[{"title":"Ozymandias","author":"Percy Bysshe Shelley",
            "lines":["I met a traveller from an antique land"],"linecount":"14"}]"#;

        let poems = parse_author_response("Percy Bysshe Shelley", body).unwrap();
        assert_eq!(poems.len(), 1);
        assert_eq!(poems[0].title, "Ozymandias");
        assert_eq!(poems[0].line_count, 14);
    }

    #[test]
    fn test_parse_numeric_linecount() {
        let body = r#"[{"title":"T","author":"A","lines":["a","b"],"linecount":2}]"#;
        let poems = parse_author_response("A", body).unwrap();
        assert_eq!(poems[0].line_count, 2);
    }

    #[test]
    fn test_unparsable_linecount_falls_back_to_lines() {
        let body = r#"[{"title":"T","author":"A","lines":["a","b","c"],"linecount":"many"}]"#;
        let poems = parse_author_response("A", body).unwrap();
        assert_eq!(poems[0].line_count, 3);
    }

    #[test]
    fn test_not_found_object() {
        let body = r#"{"status":404,"reason":"Not found"}"#;
        let result = parse_author_response("Nobody", body);
        assert_eq!(result, Err(FetchError::NotFound("Nobody".to_string())));
    }

    #[test]
    fn test_malformed_body() {
        let result = parse_author_response("A", "<html>");
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_empty_array() {
        let poems = parse_author_response("A", "[]").unwrap();
        assert!(poems.is_empty());
    }
}
