//! Business logic and provider trait definitions for askdoc.
//!
//! This crate defines the "ports" (LLM provider, embedder, vector store,
//! web search) that the infrastructure layer implements, plus the logic
//! built on top of them: the document index and retriever, the tool
//! registry, the agent executor, and per-session chat memory. It depends
//! only on `askdoc-types` -- never on `askdoc-infra` or any IO crate.

pub mod agent;
pub mod chat;
pub mod embedding;
pub mod index;
pub mod llm;
pub mod search;
pub mod tool;

#[cfg(test)]
pub(crate) mod testing;
