//! Embedder implementations.

pub mod openai;
