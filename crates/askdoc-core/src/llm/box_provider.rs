//! Type-erased chat provider.
//!
//! `LlmProvider::complete` returns `impl Future`, which rules out
//! `dyn LlmProvider`. `LlmProviderDyn` restates the trait with a pinned,
//! boxed future; every provider gets it through the blanket impl, and
//! `BoxLlmProvider` owns one behind a `Box`.

use std::future::Future;
use std::pin::Pin;

use askdoc_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::provider::LlmProvider;

/// Boxed completion future borrowed from the provider and the request.
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CompletionResponse, LlmError>> + Send + 'a>>;

/// Dyn-compatible mirror of [`LlmProvider`].
pub trait LlmProviderDyn: Send + Sync {
    fn dyn_name(&self) -> &str;

    fn dyn_default_model(&self) -> &str;

    fn dyn_complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a>;
}

impl<P: LlmProvider> LlmProviderDyn for P {
    fn dyn_name(&self) -> &str {
        self.name()
    }

    fn dyn_default_model(&self) -> &str {
        self.default_model()
    }

    fn dyn_complete<'a>(&'a self, request: &'a CompletionRequest) -> CompletionFuture<'a> {
        Box::pin(self.complete(request))
    }
}

/// A chat provider chosen at runtime.
pub struct BoxLlmProvider {
    inner: Box<dyn LlmProviderDyn>,
}

impl BoxLlmProvider {
    pub fn new<P: LlmProvider + 'static>(provider: P) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.dyn_name()
    }

    pub fn default_model(&self) -> &str {
        self.inner.dyn_default_model()
    }

    /// One non-streaming completion: a final answer or tool-call requests.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        self.inner.dyn_complete(request).await
    }
}
