//! Main question/answer loop.
//!
//! Reads one question per line, runs the agent with the session's history,
//! prints the answer, and records the turn. Blank lines are skipped; end of
//! input ends the loop normally. Any agent error ends the loop and is
//! returned to the caller.

use std::io::Write;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use askdoc_core::agent::executor::AgentExecutor;
use askdoc_core::chat::memory::SessionStore;
use askdoc_types::chat::{SessionId, Turn};

/// Shown before every question.
pub const PROMPT: &str = "Ask your question!! ";

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the loop until `input` is exhausted. Returns the number of
/// completed turns.
pub async fn run_chat_loop<R, W>(
    agent: &AgentExecutor,
    sessions: &mut SessionStore,
    session: &SessionId,
    input: R,
    output: &mut W,
    show_spinner: bool,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut turns = 0usize;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output)?;
            debug!(session = %session, "End of input");
            break;
        };
        let question = line.trim();
        if question.is_empty() {
            continue;
        }

        let spinner = show_spinner.then(thinking_spinner);
        let result = agent.invoke(question, sessions.history(session)).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let answer = result?;

        writeln!(output, "{}", answer.output)?;
        output.flush()?;

        info!(
            session = %session,
            tool_calls = answer.steps.len(),
            "Turn complete"
        );
        sessions.append(session, Turn::new(question, answer.output));
        turns += 1;
    }

    Ok(turns)
}
