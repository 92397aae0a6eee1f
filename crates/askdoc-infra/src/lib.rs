//! Infrastructure layer for askdoc.
//!
//! Contains implementations of the ports defined in `askdoc-core`: the
//! OpenAI chat and embeddings clients, the Tavily search client, the
//! in-process vector store, plus filesystem document loading, chunking,
//! configuration and secret resolution.

pub mod config;
pub mod embedding;
pub mod llm;
pub mod search;
pub mod secret;
pub mod storage;
pub mod vector;
