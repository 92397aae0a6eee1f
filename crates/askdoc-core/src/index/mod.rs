//! Embedding index over the loaded document.
//!
//! `VectorStore` is the storage port (in-process implementation in
//! askdoc-infra). `DocumentIndex` embeds every chunk once at startup and
//! afterwards only answers similarity queries; `DocumentRetriever` adds the
//! default top-k.

pub mod document_index;
pub mod retriever;
pub mod vector;
