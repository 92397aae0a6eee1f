//! Tavily web search client.
//!
//! Posts to `{base_url}/search` and keeps only each hit's URL and content.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use askdoc_core::search::WebSearch;
use askdoc_types::config::SearchConfig;
use askdoc_types::error::SearchError;
use askdoc_types::search::{SearchDepth, SearchResult};

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: u32,
    search_depth: SearchDepth,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyHit>,
}

#[derive(Debug, Deserialize)]
struct TavilyHit {
    url: String,
    #[serde(default)]
    content: String,
}

/// Tavily search backend.
pub struct TavilySearch {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    max_results: u32,
    depth: SearchDepth,
}

impl TavilySearch {
    pub fn new(api_key: SecretString, config: &SearchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_results: config.max_results,
            depth: config.depth,
        }
    }
}

fn into_results(response: TavilyResponse, max_results: u32) -> Vec<SearchResult> {
    response
        .results
        .into_iter()
        .take(max_results as usize)
        .map(|hit| SearchResult {
            url: hit.url,
            content: hit.content,
        })
        .collect()
}

impl WebSearch for TavilySearch {
    fn name(&self) -> &str {
        "tavily"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!(query, max_results = self.max_results, depth = ?self.depth, "Tavily search");

        let response = self
            .client
            .post(&url)
            .json(&TavilyRequest {
                api_key: self.api_key.expose_secret(),
                query,
                max_results: self.max_results,
                search_depth: self.depth,
            })
            .send()
            .await
            .map_err(|e| SearchError::Provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => SearchError::AuthenticationFailed,
                _ => SearchError::Provider(format!("HTTP {status}: {body}")),
            });
        }

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Deserialization(e.to_string()))?;
        Ok(into_results(parsed, self.max_results))
    }
}
