//! API key resolution.

pub mod env;
