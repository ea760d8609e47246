//! Terminal presentation layer.
//!
//! A small, game-oriented rendering layer for terminal play. The view maps
//! read-only snapshots into a character frame; the renderer flushes frames to
//! the terminal. Nothing here reaches into the simulation beyond the
//! snapshot surface.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{Frame, GameView, Glyph};
