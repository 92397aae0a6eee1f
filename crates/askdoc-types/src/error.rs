use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to locating and reading the source document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("data directory '{0}' contains no files")]
    EmptyDirectory(PathBuf),

    #[error("failed to create data directory '{path}': {message}")]
    CreateDirectory { path: PathBuf, message: String },

    #[error("failed to list data directory '{path}': {message}")]
    ListDirectory { path: PathBuf, message: String },

    #[error("failed to read document '{path}': {message}")]
    Read { path: PathBuf, message: String },
}

/// Errors related to chunker configuration.
#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },

    #[error("invalid chunk configuration: {0}")]
    InvalidConfig(String),
}

/// Errors from the hosted embedding service.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding provider error: {0}")]
    Provider(String),

    #[error("embedding authentication failed")]
    AuthenticationFailed,

    #[error("embedding response could not be parsed: {0}")]
    Deserialization(String),

    #[error("expected {expected} embeddings, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Errors from building or querying the embedding index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("vector dimension mismatch: index holds {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("document produced no chunks to index")]
    NoChunks,
}

/// Errors from the hosted web search service.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search provider error: {0}")]
    Provider(String),

    #[error("search authentication failed")]
    AuthenticationFailed,

    #[error("search response could not be parsed: {0}")]
    Deserialization(String),
}

/// Errors raised while invoking an agent tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("tool '{0}' is not registered")]
    NotFound(String),

    #[error("invalid arguments for tool '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },

    #[error(transparent)]
    Retrieval(#[from] IndexError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Errors that end an agent turn abnormally.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("agent stopped after {max} iterations without a final answer")]
    IterationLimit { max: usize },
}
