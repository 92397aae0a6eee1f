//! Embedding port and its type-erased wrapper.

pub mod box_embedder;
pub mod embedder;
