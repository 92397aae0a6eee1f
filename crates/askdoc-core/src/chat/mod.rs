//! Per-session chat memory.

pub mod memory;
