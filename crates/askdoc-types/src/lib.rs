//! Shared domain types for askdoc.
//!
//! This crate contains the core domain types used across the askdoc
//! workspace: documents and chunks, chat sessions, LLM messages and tool
//! calls, web search results, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod document;
pub mod error;
pub mod llm;
pub mod search;
