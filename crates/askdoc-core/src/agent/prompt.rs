//! Prompt assembly for the agent executor.
//!
//! Message order is fixed: system instruction, prior session history,
//! the new human input, then the scratchpad of this turn's tool calls and
//! their results.

use askdoc_types::chat::ChatHistory;
use askdoc_types::llm::Message;

/// Build the full message list for one model call.
pub fn build_messages(
    system_prompt: &str,
    history: &ChatHistory,
    input: &str,
    scratchpad: &[Message],
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2 + history.len() * 2 + scratchpad.len());
    messages.push(Message::system(system_prompt));
    messages.extend(history.to_messages());
    messages.push(Message::user(input));
    messages.extend(scratchpad.iter().cloned());
    messages
}
