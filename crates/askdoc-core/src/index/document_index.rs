//! Document embedding index.
//!
//! Built once from the chunks of the startup document. There is no API to
//! add, refresh, or remove entries afterwards.

use tracing::{debug, info};

use askdoc_types::document::{Chunk, ScoredChunk};
use askdoc_types::error::{EmbeddingError, IndexError};

use crate::embedding::box_embedder::BoxEmbedder;

use super::vector::VectorStore;

/// Embeddings of every chunk of the loaded document, plus the embedder used
/// to embed queries the same way.
pub struct DocumentIndex {
    embedder: BoxEmbedder,
    store: Box<dyn VectorStore>,
}

impl DocumentIndex {
    /// Embed all `chunks` and load them into `store`.
    ///
    /// Any embedding failure aborts the build; there is no retry.
    pub async fn build(
        chunks: Vec<Chunk>,
        embedder: BoxEmbedder,
        mut store: Box<dyn VectorStore>,
    ) -> Result<Self, IndexError> {
        if chunks.is_empty() {
            return Err(IndexError::NoChunks);
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        debug!(
            chunks = texts.len(),
            model = embedder.model_name(),
            "Embedding document chunks"
        );
        let embeddings = embedder.embed(&texts).await?;
        if embeddings.len() != chunks.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: chunks.len(),
                actual: embeddings.len(),
            }
            .into());
        }

        for (chunk, embedding) in chunks.into_iter().zip(embeddings) {
            store.add(chunk, embedding)?;
        }

        info!(
            chunks = store.len(),
            model = embedder.model_name(),
            dimension = embedder.dimension(),
            "Document index built"
        );

        Ok(Self { embedder, store })
    }

    /// Embed `query` and return the `k` nearest chunks, best first.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        let mut embeddings = self.embedder.embed(&[query.to_string()]).await?;
        if embeddings.len() != 1 {
            return Err(EmbeddingError::CountMismatch {
                expected: 1,
                actual: embeddings.len(),
            }
            .into());
        }
        let query_embedding = embeddings.swap_remove(0);
        self.store.search(&query_embedding, k)
    }

    /// Number of indexed chunks.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn embedding_model(&self) -> &str {
        self.embedder.model_name()
    }
}
