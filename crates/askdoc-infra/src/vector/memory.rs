//! In-process vector store.
//!
//! Holds every (chunk, embedding) pair in memory and answers queries by
//! brute-force cosine similarity. One document's worth of chunks is small
//! enough that no approximate index is needed. Nothing is persisted.

use askdoc_core::index::vector::{VectorStore, cosine_similarity};
use askdoc_types::document::{Chunk, ScoredChunk};
use askdoc_types::error::IndexError;

/// Flat in-memory vector store with a fixed dimension.
#[derive(Debug, Default)]
pub struct InMemoryVectorStore {
    dimension: Option<usize>,
    entries: Vec<Entry>,
}

#[derive(Debug)]
struct Entry {
    chunk: Chunk,
    embedding: Vec<f32>,
}

impl InMemoryVectorStore {
    /// Store whose dimension is fixed by the first added embedding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that only accepts `dimension`-long vectors.
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension: Some(dimension),
            entries: Vec::new(),
        }
    }

    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    fn check_dimension(&self, actual: usize) -> Result<(), IndexError> {
        match self.dimension {
            Some(expected) if expected != actual => {
                Err(IndexError::DimensionMismatch { expected, actual })
            }
            _ => Ok(()),
        }
    }
}

impl VectorStore for InMemoryVectorStore {
    fn add(&mut self, chunk: Chunk, embedding: Vec<f32>) -> Result<(), IndexError> {
        self.check_dimension(embedding.len())?;
        self.dimension.get_or_insert(embedding.len());
        self.entries.push(Entry { chunk, embedding });
        Ok(())
    }

    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        if self.entries.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        self.check_dimension(query.len())?;

        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|e| ScoredChunk {
                chunk: e.chunk.clone(),
                score: cosine_similarity(query, &e.embedding).unwrap_or(0.0),
            })
            .collect();

        // Best first; equal scores keep document order.
        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.chunk.index.cmp(&b.chunk.index))
        });
        scored.truncate(limit);
        Ok(scored)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
