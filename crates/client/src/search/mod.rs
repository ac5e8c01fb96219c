//! Remote component search.
//!
//! Queries the documentation site's search endpoint with `?q=<query>`, keeps
//! results tagged as components and returns their titles. Any transport or
//! parse failure yields an empty list.

pub mod error;
pub mod response;

pub use error::SearchError;
pub use response::{SearchHit, SearchPayload, component_titles};

use reqwest::header;
use std::time::{Duration, Instant};

use crate::Outcome;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default user agent.
const DEFAULT_USER_AGENT: &str = "mantine-docs-mcp/0.1";

/// Search client configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Request timeout (default: 10s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

/// HTTP client for the component search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    /// Create a new search client with the given configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, config })
    }

    /// Query `endpoint` and return the raw result records.
    pub async fn query(&self, endpoint: &str, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = reqwest::Url::parse(endpoint).map_err(|e| SearchError::InvalidEndpoint(e.to_string()))?;
        let start = Instant::now();

        tracing::debug!(%url, query, "searching components");

        let response = self
            .http
            .get(url)
            .query(&[("q", query)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(SearchError::HttpError { status: status.as_u16() });
        }

        let bytes = response.bytes().await?;
        let payload: SearchPayload = serde_json::from_slice(&bytes).map_err(|e| SearchError::Parse(e.to_string()))?;
        let hits = payload.into_hits();

        tracing::debug!("search completed in {:?}, {} results", start.elapsed(), hits.len());
        Ok(hits)
    }

    /// Search for components matching `query`.
    ///
    /// Failures are logged and produce `Outcome::Fallback` with no results.
    pub async fn search(&self, endpoint: &str, query: &str) -> Outcome<Vec<String>> {
        let query = query.trim();
        if query.is_empty() {
            return Outcome::Live(Vec::new());
        }

        match self.query(endpoint, query).await {
            Ok(hits) => Outcome::Live(component_titles(hits)),
            Err(e) => {
                tracing::warn!(query, error = %e, "component search failed, returning no results");
                Outcome::Fallback(Vec::new())
            }
        }
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
