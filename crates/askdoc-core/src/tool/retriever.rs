//! Document retriever tool.

use tracing::info;

use askdoc_types::error::ToolError;

use crate::index::retriever::DocumentRetriever;

use super::{QueryArgs, Tool};

pub const RETRIEVER_TOOL_NAME: &str = "text_retreiver";
pub const RETRIEVER_TOOL_DESCRIPTION: &str = "Give answer based on the file";

/// Exposes the document retriever to the model. Returns the retrieved
/// chunks' text, best match first, separated by blank lines.
pub struct RetrieverTool {
    retriever: DocumentRetriever,
}

impl RetrieverTool {
    pub fn new(retriever: DocumentRetriever) -> Self {
        Self { retriever }
    }
}

impl Tool for RetrieverTool {
    fn name(&self) -> &str {
        RETRIEVER_TOOL_NAME
    }

    fn description(&self) -> &str {
        RETRIEVER_TOOL_DESCRIPTION
    }

    fn parameters(&self) -> serde_json::Value {
        QueryArgs::schema()
    }

    async fn invoke(&self, arguments: &str) -> Result<String, ToolError> {
        let args = QueryArgs::parse(RETRIEVER_TOOL_NAME, arguments)?;
        let hits = self.retriever.retrieve(&args.query).await?;
        info!(query = %args.query, chunks = hits.len(), "Document retrieval");
        Ok(hits
            .iter()
            .map(|h| h.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}
