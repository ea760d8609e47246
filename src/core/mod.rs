//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, input, or I/O.

pub mod bag;
pub mod board;
pub mod catalog;
pub mod game;
pub mod hold;
pub mod piece;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use bag::{Bag, SimpleRng};
pub use board::Board;
pub use catalog::{PieceCatalog, PieceShape};
pub use game::Game;
pub use hold::HoldSlot;
pub use piece::ActivePiece;
pub use scoring::ScoreTracker;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
