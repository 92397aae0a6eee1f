//! askdoc entry point.
//!
//! Binary name: `askdoc`
//!
//! Parses CLI arguments, sets up logging, builds the document index and the
//! agent, then runs the question/answer loop on stdin/stdout.

mod chat;
mod cli;
mod state;

use clap::Parser;
use tracing::info;

use askdoc_core::chat::memory::SessionStore;
use askdoc_observe::tracing_setup::{default_filter, init_tracing, shutdown_tracing};
use askdoc_types::chat::SessionId;

use chat::banner::{BannerInfo, print_welcome_banner};
use chat::loop_runner::run_chat_loop;
use cli::Cli;
use state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(default_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::init(&cli).await?;
    info!(
        data_dir = %state.config.data_dir.display(),
        document = %state.document.display(),
        chunks = state.chunks,
        model = state.agent.model(),
        "Ready"
    );

    let session = cli
        .session
        .clone()
        .map(SessionId::new)
        .unwrap_or_else(|| SessionId::new(uuid::Uuid::now_v7().to_string()));

    if !cli.quiet {
        let document = state.document.display().to_string();
        let tools = state.agent.tools().names();
        print_welcome_banner(&BannerInfo {
            document: &document,
            chunks: state.chunks,
            model: state.agent.model(),
            tools: &tools,
            session_id: session.as_str(),
        });
    }

    let mut sessions = SessionStore::new();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let show_spinner = !cli.quiet && console::Term::stderr().is_term();

    let turns = run_chat_loop(
        &state.agent,
        &mut sessions,
        &session,
        stdin,
        &mut stdout,
        show_spinner,
    )
    .await?;

    info!(session = %session, turns, "Session ended");
    Ok(())
}
