//! Top-k retriever over the document index.

use tracing::debug;

use askdoc_types::document::ScoredChunk;
use askdoc_types::error::IndexError;

use super::document_index::DocumentIndex;

/// Default number of chunks returned per query.
pub const DEFAULT_TOP_K: usize = 4;

/// Nearest-neighbour lookup with a fixed `k`.
pub struct DocumentRetriever {
    index: DocumentIndex,
    top_k: usize,
}

impl DocumentRetriever {
    pub fn new(index: DocumentIndex, top_k: usize) -> Self {
        Self {
            index,
            top_k: top_k.max(1),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Return the `top_k` chunks most similar to `query`.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ScoredChunk>, IndexError> {
        let hits = self.index.search(query, self.top_k).await?;
        debug!(query, hits = hits.len(), "Retrieved document chunks");
        Ok(hits)
    }
}
