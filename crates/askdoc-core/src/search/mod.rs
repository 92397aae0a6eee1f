//! Web search port.
//!
//! The hosted search backend (Tavily) is implemented in askdoc-infra.

use askdoc_types::error::SearchError;
use askdoc_types::search::SearchResult;

/// Trait for web search backends.
pub trait WebSearch: Send + Sync {
    /// Backend name for logging (e.g., "tavily").
    fn name(&self) -> &str;

    /// Run `query` and return the backend's top hits.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, SearchError>> + Send;
}
