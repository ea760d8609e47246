//! Blockfall: a falling-block puzzle simulation core with a thin terminal
//! frontend.
//!
//! The `core` module owns all game rules and is free of I/O; the `term` and
//! `input` modules are the external collaborators, consuming read-only
//! snapshots and feeding an abstract command stream.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
