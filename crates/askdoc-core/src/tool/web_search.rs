//! Web search tool.

use tracing::info;

use askdoc_types::error::{SearchError, ToolError};

use crate::search::WebSearch;

use super::{QueryArgs, Tool};

pub const WEB_SEARCH_TOOL_NAME: &str = "tavily_search_results_json";
pub const WEB_SEARCH_TOOL_DESCRIPTION: &str = "A search engine optimized for comprehensive, \
accurate, and trusted results. Useful for when you need to answer questions about current \
events. Input should be a search query.";

/// Exposes a `WebSearch` backend to the model. Returns the hits as a JSON
/// array of `{url, content}` objects.
pub struct WebSearchTool<S> {
    search: S,
}

impl<S: WebSearch> WebSearchTool<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }
}

impl<S: WebSearch> Tool for WebSearchTool<S> {
    fn name(&self) -> &str {
        WEB_SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        WEB_SEARCH_TOOL_DESCRIPTION
    }

    fn parameters(&self) -> serde_json::Value {
        QueryArgs::schema()
    }

    async fn invoke(&self, arguments: &str) -> Result<String, ToolError> {
        let args = QueryArgs::parse(WEB_SEARCH_TOOL_NAME, arguments)?;
        let results = self.search.search(&args.query).await?;
        info!(
            backend = self.search.name(),
            query = %args.query,
            results = results.len(),
            "Web search"
        );
        serde_json::to_string(&results)
            .map_err(|e| ToolError::Search(SearchError::Deserialization(e.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticSearch;
    use askdoc_types::search::SearchResult;

    #[tokio::test]
    async fn test_output_is_json_array_of_hits() {
        let search = StaticSearch::new(vec![SearchResult {
            url: "https://weather.example/paris".to_string(),
            content: "Sunny, 21C".to_string(),
        }]);
        let tool = WebSearchTool::new(search.clone());

        let output = tool
            .invoke(r#"{"query":"weather in Paris today"}"#)
            .await
            .unwrap();
        let parsed: Vec<SearchResult> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].content, "Sunny, 21C");
        assert_eq!(search.queries(), vec!["weather in Paris today".to_string()]);
    }

    #[tokio::test]
    async fn test_backend_failure_is_tool_error() {
        let tool = WebSearchTool::new(StaticSearch::failing());
        let err = tool.invoke(r#"{"query":"x"}"#).await.unwrap_err();
        assert!(matches!(err, ToolError::Search(SearchError::Provider(_))));
    }

    #[test]
    fn test_definition_name() {
        let tool = WebSearchTool::new(StaticSearch::new(Vec::new()));
        assert_eq!(tool.definition().name, "tavily_search_results_json");
    }
}
