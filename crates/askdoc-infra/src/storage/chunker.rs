//! Document chunker.
//!
//! Splits a document into overlapping chunks using the `text-splitter`
//! crate, which breaks on the largest semantic boundary that fits
//! (paragraphs, then sentences, then words, then characters). Markdown
//! files use the markdown-aware splitter. Sizes count characters.
//!
//! Surrounding whitespace is trimmed from each chunk; offsets still point
//! at the chunk's position in the original content.

use text_splitter::{ChunkConfig, MarkdownSplitter, TextSplitter};
use tracing::debug;

use askdoc_types::document::{Chunk, Document};
use askdoc_types::error::ChunkError;

/// Default chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Splits documents into bounded, overlapping chunks.
#[derive(Debug, Clone)]
pub struct DocumentChunker {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl DocumentChunker {
    /// Create a chunker. `chunk_overlap` must be smaller than `chunk_size`.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `document` into chunks in document order.
    ///
    /// An empty or whitespace-only document yields no chunks.
    pub fn chunk(&self, document: &Document) -> Result<Vec<Chunk>, ChunkError> {
        let config = ChunkConfig::new(self.chunk_size)
            .with_overlap(self.chunk_overlap)
            .map_err(|e| ChunkError::InvalidConfig(e.to_string()))?;

        let pieces: Vec<(usize, &str)> = if document.is_markdown() {
            MarkdownSplitter::new(config)
                .chunk_indices(&document.content)
                .collect()
        } else {
            TextSplitter::new(config)
                .chunk_indices(&document.content)
                .collect()
        };

        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .filter(|(_, text)| !text.trim().is_empty())
            .enumerate()
            .map(|(index, (offset, text))| Chunk {
                index,
                offset,
                text: text.to_string(),
            })
            .collect();

        debug!(
            path = %document.path.display(),
            chunks = chunks.len(),
            chunk_size = self.chunk_size,
            chunk_overlap = self.chunk_overlap,
            "Chunked document"
        );
        Ok(chunks)
    }
}

impl Default for DocumentChunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}
