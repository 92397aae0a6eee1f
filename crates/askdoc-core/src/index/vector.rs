//! Vector store trait.
//!
//! Defines the interface for nearest-neighbour search over chunk
//! embeddings. Implementations live in askdoc-infra.

use askdoc_types::document::{Chunk, ScoredChunk};
use askdoc_types::error::IndexError;

/// Storage of (embedding, chunk) pairs with top-k similarity search.
pub trait VectorStore: Send + Sync {
    /// Store a chunk with its embedding.
    fn add(&mut self, chunk: Chunk, embedding: Vec<f32>) -> Result<(), IndexError>;

    /// Return up to `limit` chunks ranked by similarity to `query`, best first.
    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredChunk>, IndexError>;

    /// Number of stored chunks.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cosine similarity of two vectors.
///
/// Returns `None` for mismatched lengths, empty input, or a zero-norm vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let x64 = f64::from(x);
        let y64 = f64::from(y);
        dot += x64 * y64;
        norm_a += x64 * x64;
        norm_b += y64 * y64;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON {
        return None;
    }
    Some((dot / denom) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_rejects_mismatch_and_zero() {
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_none());
        assert!(cosine_similarity(&[], &[]).is_none());
        assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]).is_none());
    }
}
