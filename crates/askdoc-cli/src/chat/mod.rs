//! Interactive question/answer loop.
//!
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod loop_runner;
