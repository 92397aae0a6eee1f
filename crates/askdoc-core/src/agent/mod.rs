//! Conversational agent.
//!
//! - `prompt`: assembles the message list sent to the model
//! - `executor`: the tool-calling loop with an iteration limit

pub mod executor;
pub mod prompt;
