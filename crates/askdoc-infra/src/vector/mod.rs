//! Vector store implementations.

pub mod memory;
