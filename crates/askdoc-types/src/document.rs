//! Document and chunk types.
//!
//! A `Document` is the raw text of the single ingested file. It is split
//! into `Chunk`s once at startup; retrieval returns `ScoredChunk`s.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Raw text content of the ingested file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Where the content was read from.
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    /// Whether the source file has a markdown extension.
    pub fn is_markdown(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "md" | "markdown"))
            .unwrap_or(false)
    }
}

/// A bounded-length slice of a `Document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Position in the chunk sequence (0-based).
    pub index: usize,
    /// Byte offset of `text` within the document content.
    pub offset: usize,
    pub text: String,
}

impl Chunk {
    /// Byte offset one past the end of this chunk.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A chunk returned by similarity search, with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is closer).
    pub score: f32,
}
