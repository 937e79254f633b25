pub mod types;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use tracing::{debug, warn};

use crate::throttle::{self, DEFAULT_SPACING};
use types::{AnswersResponse, SearchResponse};

const API_BASE: &str = "https://api.stackexchange.com/2.3";
const SITE: &str = "stackoverflow";
/// Answers fetched per question (top of the vote ordering).
const ANSWER_PAGE_SIZE: u8 = 3;

/// Characters to percent-encode in a query string value.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Errors surfaced by Stack Exchange API operations.
///
/// Fetch failures are deliberately opaque: status, transport, and parse
/// detail goes to the log, not to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StackExchangeError {
    #[error("Stack Exchange API key is missing. Please check your settings and try again.")]
    ApiKeyMissing,

    #[error("Something went wrong while fetching data. Please try again later.")]
    Fetch,
}

#[derive(Clone)]
struct ApiKey(String);

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// HTTP client for the Stack Exchange REST API v2.3.
///
/// Construction fails without a usable API key, so every instance holds a
/// credential before the first request goes out. The `reqwest::Client` is
/// injected by the host, which owns timeout and proxy policy.
#[derive(Debug, Clone)]
pub struct StackExchangeClient {
    http: Client,
    api_key: ApiKey,
    base_url: String,
}

impl StackExchangeClient {
    pub fn new(http: Client, api_key: Option<&str>) -> Result<Self, StackExchangeError> {
        let key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(StackExchangeError::ApiKeyMissing)?;
        Ok(Self {
            http,
            api_key: ApiKey(key.to_string()),
            base_url: API_BASE.to_string(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(http: Client, base_url: &str) -> Self {
        Self {
            http,
            api_key: ApiKey("test-key".to_string()),
            base_url: base_url.to_string(),
        }
    }

    /// Search questions matching `keyword`, most relevant first.
    pub async fn search(&self, keyword: &str) -> Result<SearchResponse, StackExchangeError> {
        let q = utf8_percent_encode(keyword, QUERY_ENCODE_SET);
        self.get_json(&format!(
            "/search/advanced?order=desc&sort=relevance&q={q}&site={SITE}&filter=withbody"
        ))
        .await
    }

    /// Top answers for one question, highest-voted first.
    pub async fn top_answers(&self, question_id: u64) -> Result<AnswersResponse, StackExchangeError> {
        self.get_json(&format!(
            "/questions/{question_id}/answers?order=desc&sort=votes&site={SITE}&filter=withbody&pagesize={ANSWER_PAGE_SIZE}"
        ))
        .await
    }

    /// Fetch the top answers for each question, one request at a time with
    /// the default spacing between requests. Results are in `question_ids`
    /// order; the first failed request aborts the rest of the sequence.
    pub async fn fetch_top_answers(
        &self,
        question_ids: &[u64],
    ) -> Result<Vec<AnswersResponse>, StackExchangeError> {
        let tasks = question_ids.iter().map(|&id| move || self.top_answers(id));
        throttle::run_spaced(tasks, DEFAULT_SPACING).await
    }

    /// GET a path and parse the JSON body. Any failure (non-success status,
    /// transport error, parse error) is logged and collapsed into the one
    /// generic fetch error.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path_and_query: &str,
    ) -> Result<T, StackExchangeError> {
        let url = format!("{}{path_and_query}&key={}", self.base_url, self.api_key.0);
        // Log the path only; the full URL carries the key.
        let path = path_and_query.split('?').next().unwrap_or(path_and_query);

        let response = self
            .http
            .get(&url)
            .header("User-Agent", crate::USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!(%path, error = %e, "request failed");
                StackExchangeError::Fetch
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%path, %status, "API returned non-success status");
            return Err(StackExchangeError::Fetch);
        }

        debug!(%path, "API request complete");
        response.json().await.map_err(|e| {
            warn!(%path, error = %e, "response body was not valid JSON");
            StackExchangeError::Fetch
        })
    }
}
