//! Embedder port: text in, fixed-length vectors out.

use askdoc_types::error::EmbeddingError;

/// Converts text into embedding vectors. The hosted implementation lives
/// in askdoc-infra.
pub trait Embedder: Send + Sync {
    /// Embed `texts`, returning exactly one vector per input in input order.
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send;

    fn model_name(&self) -> &str;

    /// Length of every vector this embedder produces.
    fn dimension(&self) -> usize;
}
