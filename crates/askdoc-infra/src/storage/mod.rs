//! Filesystem document source and chunking.

pub mod chunker;
pub mod document;
