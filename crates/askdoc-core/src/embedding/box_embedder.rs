//! Type-erased embedder, built the same way as `BoxLlmProvider`.

use std::future::Future;
use std::pin::Pin;

use askdoc_types::error::EmbeddingError;

use super::embedder::Embedder;

/// Boxed embedding future.
pub type EmbedFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<Vec<f32>>, EmbeddingError>> + Send + 'a>>;

/// Dyn-compatible mirror of [`Embedder`].
pub trait EmbedderDyn: Send + Sync {
    fn dyn_embed<'a>(&'a self, texts: &'a [String]) -> EmbedFuture<'a>;

    fn dyn_model_name(&self) -> &str;

    fn dyn_dimension(&self) -> usize;
}

impl<E: Embedder> EmbedderDyn for E {
    fn dyn_embed<'a>(&'a self, texts: &'a [String]) -> EmbedFuture<'a> {
        Box::pin(self.embed(texts))
    }

    fn dyn_model_name(&self) -> &str {
        self.model_name()
    }

    fn dyn_dimension(&self) -> usize {
        self.dimension()
    }
}

/// An embedder chosen at runtime.
pub struct BoxEmbedder {
    inner: Box<dyn EmbedderDyn>,
}

impl BoxEmbedder {
    pub fn new<E: Embedder + 'static>(embedder: E) -> Self {
        Self {
            inner: Box::new(embedder),
        }
    }

    /// One vector per input, in input order.
    pub async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.inner.dyn_embed(texts).await
    }

    pub fn model_name(&self) -> &str {
        self.inner.dyn_model_name()
    }

    pub fn dimension(&self) -> usize {
        self.inner.dyn_dimension()
    }
}
