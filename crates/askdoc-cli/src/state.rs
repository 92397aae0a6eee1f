//! Application state: everything built once at startup.
//!
//! Loads configuration and keys, reads and chunks the document, embeds it
//! into the index, and wires both tools into the agent executor.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use askdoc_core::agent::executor::{AgentExecutor, AgentSettings};
use askdoc_core::embedding::box_embedder::BoxEmbedder;
use askdoc_core::index::document_index::DocumentIndex;
use askdoc_core::index::retriever::DocumentRetriever;
use askdoc_core::llm::box_provider::BoxLlmProvider;
use askdoc_core::tool::BoxTool;
use askdoc_core::tool::registry::ToolRegistry;
use askdoc_core::tool::retriever::RetrieverTool;
use askdoc_core::tool::web_search::WebSearchTool;
use askdoc_infra::config::load_config;
use askdoc_infra::embedding::openai::OpenAiEmbedder;
use askdoc_infra::llm::openai::OpenAiProvider;
use askdoc_infra::search::tavily::TavilySearch;
use askdoc_infra::secret::env::{
    OPENAI_KEY_VARS, TAVILY_KEY_VARS, load_dotenv, resolve_secret_or_warn,
};
use askdoc_infra::storage::chunker::DocumentChunker;
use askdoc_infra::storage::document::{ensure_data_dir, load_document, load_first_document};
use askdoc_infra::vector::memory::InMemoryVectorStore;
use askdoc_types::config::AppConfig;

use crate::cli::Cli;

/// Shared application state.
pub struct AppState {
    pub config: AppConfig,
    /// Path of the ingested document.
    pub document: PathBuf,
    /// Number of indexed chunks.
    pub chunks: usize,
    pub agent: AgentExecutor,
}

impl AppState {
    /// Build the full pipeline. Fails if the document cannot be loaded or
    /// indexed.
    pub async fn init(cli: &Cli) -> anyhow::Result<Self> {
        load_dotenv();

        let mut config = load_config(&cli.config).await;
        if let Some(dir) = &cli.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(model) = &cli.model {
            config.llm.model = model.clone();
        }

        ensure_data_dir(&config.data_dir).await?;
        let document = match &cli.document {
            Some(path) => load_document(path).await?,
            None => load_first_document(&config.data_dir).await?,
        };
        info!(path = %document.path.display(), bytes = document.content.len(), "Document loaded");

        let chunker =
            DocumentChunker::new(config.chunking.chunk_size, config.chunking.chunk_overlap)?;
        let chunks = chunker.chunk(&document)?;

        let openai_key = resolve_secret_or_warn("OpenAI", OPENAI_KEY_VARS);
        let tavily_key = resolve_secret_or_warn("Tavily", TAVILY_KEY_VARS);

        let embedder = OpenAiEmbedder::new(
            openai_key.clone(),
            config.embedding.model.clone(),
            config.embedding.dimension,
        )
        .with_base_url(config.embedding.base_url.clone())
        .with_batch_size(config.embedding.batch_size);
        let store = InMemoryVectorStore::with_dimension(config.embedding.dimension);
        let index = DocumentIndex::build(chunks, BoxEmbedder::new(embedder), Box::new(store))
            .await
            .with_context(|| format!("failed to index {}", document.path.display()))?;
        let chunk_count = index.len();

        let tools = ToolRegistry::new()
            .with(BoxTool::new(RetrieverTool::new(DocumentRetriever::new(
                index,
                config.retriever.top_k,
            ))))
            .with(BoxTool::new(WebSearchTool::new(TavilySearch::new(
                tavily_key,
                &config.search,
            ))));

        let provider = OpenAiProvider::new(openai_key, config.llm.model.clone())
            .with_base_url(config.llm.base_url.clone());
        let agent = AgentExecutor::new(
            BoxLlmProvider::new(provider),
            tools,
            AgentSettings::from_config(&config.llm, &config.agent),
        );

        Ok(Self {
            document: document.path,
            chunks: chunk_count,
            agent,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdoc_types::error::{DocumentError, IndexError};
    use clap::Parser;
    use std::ffi::OsString;
    use tempfile::TempDir;

    fn cli_for(tmp: &TempDir, data_dir: &str) -> Cli {
        let args: Vec<OsString> = vec![
            "askdoc".into(),
            "--config".into(),
            tmp.path().join("askdoc.toml").into_os_string(),
            "--data-dir".into(),
            tmp.path().join(data_dir).into_os_string(),
        ];
        Cli::try_parse_from(args).unwrap()
    }

    #[tokio::test]
    async fn test_missing_data_dir_is_created_then_empty_error() {
        let tmp = TempDir::new().unwrap();
        let cli = cli_for(&tmp, "data");

        let err = AppState::init(&cli).await.err().unwrap();
        assert!(tmp.path().join("data").is_dir());
        assert!(matches!(
            err.downcast_ref::<DocumentError>(),
            Some(DocumentError::EmptyDirectory(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_document_fails_before_any_network_call() {
        let tmp = TempDir::new().unwrap();
        let cli = cli_for(&tmp, "data");
        tokio::fs::create_dir_all(tmp.path().join("data")).await.unwrap();
        tokio::fs::write(tmp.path().join("data/empty.txt"), "   \n").await.unwrap();

        let err = AppState::init(&cli).await.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<IndexError>(),
            Some(IndexError::NoChunks)
        ));
    }
}
