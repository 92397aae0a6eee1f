//! Chat-completion provider port.

use askdoc_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// A chat-completion backend that understands function tools.
///
/// The OpenAI implementation lives in askdoc-infra.
pub trait LlmProvider: Send + Sync {
    /// Provider name for logs and spans (e.g., "openai").
    fn name(&self) -> &str;

    /// Model used when a request leaves `model` empty.
    fn default_model(&self) -> &str;

    /// Send one request and wait for the whole response, which is either a
    /// final answer or a set of tool-call requests.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
