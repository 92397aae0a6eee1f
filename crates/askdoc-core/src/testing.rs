//! Test doubles for the core ports.

use std::sync::{Arc, Mutex};

use askdoc_types::document::{Chunk, ScoredChunk};
use askdoc_types::error::{EmbeddingError, IndexError, SearchError};
use askdoc_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, StopReason, ToolCall, Usage,
};
use askdoc_types::search::SearchResult;

use crate::embedding::embedder::Embedder;
use crate::index::vector::{VectorStore, cosine_similarity};
use crate::llm::provider::LlmProvider;
use crate::search::WebSearch;

const KEYWORDS: &[&str] = &[
    "refund", "return", "policy", "hours", "weekday", "shipping", "free", "weather", "sunny",
];

/// Build sequential chunks from plain texts.
pub fn chunks_from(texts: &[&str]) -> Vec<Chunk> {
    let mut offset = 0;
    texts
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let chunk = Chunk {
                index,
                offset,
                text: text.to_string(),
            };
            offset += text.len();
            chunk
        })
        .collect()
}

/// Bag-of-keywords embedder with a constant bias dimension, so every
/// vector has a non-zero norm.
#[derive(Default)]
pub struct KeywordEmbedder {
    fail: bool,
}

impl KeywordEmbedder {
    pub fn failing() -> Self {
        Self { fail: true }
    }

    fn vector(text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        let mut v = Vec::with_capacity(KEYWORDS.len() + 1);
        v.push(1.0);
        v.extend(
            KEYWORDS
                .iter()
                .map(|kw| if lower.contains(kw) { 1.0 } else { 0.0 }),
        );
        v
    }
}

impl Embedder for KeywordEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::Provider("embedding service unavailable".to_string()));
        }
        Ok(texts.iter().map(|t| Self::vector(t)).collect())
    }

    fn model_name(&self) -> &str {
        "keyword-test"
    }

    fn dimension(&self) -> usize {
        KEYWORDS.len() + 1
    }
}

/// Brute-force vector store.
#[derive(Default)]
pub struct FlatStore {
    entries: Vec<(Chunk, Vec<f32>)>,
}

impl VectorStore for FlatStore {
    fn add(&mut self, chunk: Chunk, embedding: Vec<f32>) -> Result<(), IndexError> {
        self.entries.push((chunk, embedding));
        Ok(())
    }

    fn search(&self, query: &[f32], limit: usize) -> Result<Vec<ScoredChunk>, IndexError> {
        let mut hits: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|(chunk, embedding)| ScoredChunk {
                chunk: chunk.clone(),
                score: cosine_similarity(query, embedding).unwrap_or(0.0),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.chunk.index.cmp(&b.chunk.index))
        });
        hits.truncate(limit);
        Ok(hits)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Provider that routes like a tool-calling model would: questions about
/// the weather go to web search, everything else to the document
/// retriever, and once a tool result is present it answers with it.
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    failure: Arc<Mutex<Option<LlmError>>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            requests: Arc::default(),
            failure: Arc::new(Mutex::new(Some(error))),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

fn response(content: &str, tool_calls: Vec<ToolCall>) -> CompletionResponse {
    let stop_reason = if tool_calls.is_empty() {
        StopReason::EndTurn
    } else {
        StopReason::ToolUse
    };
    CompletionResponse {
        id: "resp".to_string(),
        content: content.to_string(),
        tool_calls,
        model: "scripted".to_string(),
        stop_reason,
        usage: Usage::default(),
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-default"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(err) = self.failure.lock().unwrap().take() {
            return Err(err);
        }

        let last = request
            .messages
            .last()
            .ok_or_else(|| LlmError::InvalidRequest("no messages".to_string()))?;

        if last.role == MessageRole::Tool {
            return Ok(response(&format!("Based on what I found: {}", last.content), Vec::new()));
        }

        let tool = if last.content.to_lowercase().contains("weather") {
            "tavily_search_results_json"
        } else {
            "text_retreiver"
        };
        let arguments = serde_json::json!({ "query": last.content }).to_string();
        Ok(response(
            "",
            vec![ToolCall {
                id: format!("call_{}", request.messages.len()),
                name: tool.to_string(),
                arguments,
            }],
        ))
    }
}

/// Provider that first calls a tool nobody registered, then answers with
/// whatever the tool message said.
#[derive(Clone, Default)]
pub struct MisroutingProvider {
    calls: Arc<Mutex<usize>>,
}

impl MisroutingProvider {
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl LlmProvider for MisroutingProvider {
    fn name(&self) -> &str {
        "misrouting"
    }

    fn default_model(&self) -> &str {
        "misrouting"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        *self.calls.lock().unwrap() += 1;
        match request.messages.last() {
            Some(last) if last.role == MessageRole::Tool => Ok(response(&last.content, Vec::new())),
            _ => Ok(response(
                "",
                vec![ToolCall {
                    id: "call_parallel".to_string(),
                    name: "multi_tool_use.parallel".to_string(),
                    arguments: "{}".to_string(),
                }],
            )),
        }
    }
}

/// Provider that never stops calling tools.
pub struct LoopingProvider;

impl LlmProvider for LoopingProvider {
    fn name(&self) -> &str {
        "looping"
    }

    fn default_model(&self) -> &str {
        "looping"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        Ok(response(
            "",
            vec![ToolCall {
                id: format!("call_{}", request.messages.len()),
                name: "text_retreiver".to_string(),
                arguments: r#"{"query":"refund"}"#.to_string(),
            }],
        ))
    }
}

/// Search backend with canned results that records its queries.
#[derive(Clone)]
pub struct StaticSearch {
    results: Vec<SearchResult>,
    fail: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

impl StaticSearch {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            fail: false,
            queries: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl WebSearch for StaticSearch {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.fail {
            return Err(SearchError::Provider("search backend unavailable".to_string()));
        }
        Ok(self.results.clone())
    }
}
