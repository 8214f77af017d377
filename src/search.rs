use std::time::Duration;

use serde::Serialize;

use crate::error::GithubActionError;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";
const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// One web result reduced to the fields an agent needs.
///
/// Values are copied from the upstream result unchanged, `null` included.
/// A key missing upstream is omitted from the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<serde_json::Value>,
}

impl SearchResultItem {
    fn from_result(result: &serde_json::Value) -> Self {
        Self {
            title: result.get("title").cloned(),
            link: result.get("url").cloned(),
            snippet: result.get("description").cloned(),
        }
    }
}

/// Client for the web search API, authenticated by a subscription token.
#[derive(Clone)]
pub struct WebSearch {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
}

impl WebSearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Deadline applied to each request. Without one a request may wait
    /// indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The endpoint may already carry a query string; `q` is appended to it.
    fn search_url(&self, query: &str) -> String {
        let sep = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}q={}", self.endpoint, sep, urlencoding::encode(query))
    }

    /// Run one search and return the reshaped results as a JSON array string.
    pub async fn search(&self, query: &str) -> Result<String, GithubActionError> {
        let items = self.fetch(query).await?;
        Ok(serde_json::to_string(&items)?)
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<SearchResultItem>, GithubActionError> {
        tracing::debug!(query_len = query.len(), "Sending web search request");

        let mut request = self
            .http
            .get(self.search_url(query))
            .header(SUBSCRIPTION_TOKEN_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Web search request failed");
            return Err(GithubActionError::Request {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let parsed: serde_json::Value = serde_json::from_slice(&body)?;
        let items = extract_results(&parsed);

        tracing::debug!(count = items.len(), "Web search returned results");
        Ok(items)
    }
}

/// Map `web.results` into result items. Anything other than an array at
/// that path yields no results.
fn extract_results(payload: &serde_json::Value) -> Vec<SearchResultItem> {
    payload
        .pointer("/web/results")
        .and_then(|r| r.as_array())
        .map(|arr| arr.iter().map(SearchResultItem::from_result).collect())
        .unwrap_or_default()
}
