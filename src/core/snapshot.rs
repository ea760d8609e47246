//! Read-only state snapshot consumed by presentation layers.
//!
//! Renderers query a snapshot every tick and never reach back into the
//! simulation beyond this surface.

use crate::core::piece::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PieceKind, PREVIEW_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            x: value.x(),
            y: value.y(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Color grid, `[row][col]`, 0 = empty.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land on if hard-dropped now.
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    /// Distinguished next piece, then the short preview window.
    pub next: PieceKind,
    pub preview: [PieceKind; PREVIEW_COUNT],
    pub score: u32,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            next: PieceKind::I,
            preview: [PieceKind::I; PREVIEW_COUNT],
            score: 0,
            game_over: false,
        }
    }
}
